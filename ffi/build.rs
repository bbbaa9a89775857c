use std::env;
use std::path::PathBuf;

const HEADER_NAME: &str = "comments_ffi.h";

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=COMMENTS_FFI_HEADER_DIR");

    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let Ok(out_dir) = env::var("OUT_DIR") else {
        println!("cargo:warning=OUT_DIR not set, skipping header generation");
        return;
    };

    let bindings = match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("COMMENTS_FFI_H")
        .generate()
    {
        Ok(bindings) => bindings,
        // Header generation must not break the library build.
        Err(err) => {
            println!("cargo:warning=cbindgen failed: {err}");
            return;
        }
    };

    bindings.write_to_file(PathBuf::from(out_dir).join(HEADER_NAME));

    // Hosts that want a checked-out header opt in with a writable directory.
    if let Ok(dir) = env::var("COMMENTS_FFI_HEADER_DIR") {
        let dir = PathBuf::from(dir);
        match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                bindings.write_to_file(dir.join(HEADER_NAME));
            }
            Err(err) => println!("cargo:warning=cannot create {}: {err}", dir.display()),
        }
    }
}
