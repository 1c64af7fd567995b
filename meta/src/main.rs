fn main() {
    multiversx_sc_meta_lib::cli_main::<policy_token::AbiProvider>();
}
