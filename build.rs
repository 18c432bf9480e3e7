fn main() {
    // Translations are embedded by `rust_i18n::i18n!` at compile time.
    println!("cargo:rerun-if-changed=locales");
}
