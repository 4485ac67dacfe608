//! Stub engines for the CLI tests
//!
//! `divvun-checker` reads one paragraph per line. It answers
//! "Mun leam boahtán." with a typo for "leam" suggesting "lean" and finds
//! nothing anywhere else.
//!
//! `divvun-runtime` reads the whole input as one text. It reports the same
//! typo suggesting "leat" instead, and an agreement error in
//! "Dát lea buorre." that the checker does not see.

use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

const STUB_CHECKER: &str = r#"#!/bin/sh
while IFS= read -r line || [ -n "$line" ]; do
  case "$line" in
    "Mun leam boahtán.")
      printf '%s\n' '{"errs":[["leam",4,8,"typo","Ii leat sátnelisttus",["lean"],"Čállinmeattáhus"]],"text":"Mun leam boahtán."}'
      ;;
    *)
      printf '{"errs":[],"text":"%s"}\n' "$line"
      ;;
  esac
done
"#;

const STUB_RUNTIME: &str = r#"#!/bin/sh
input=$(cat)
case "$input" in
  "Mun leam boahtán.")
    printf '%s\n' '{"text":"Mun leam boahtán.","errors":[{"form":"leam","start":4,"end":8,"error_id":"err-typo","title":"Čállinmeattáhus","description":"","suggestions":["leat"]}],"encoding":"utf-8"}'
    ;;
  "Dát lea buorre.")
    printf '%s\n' '{"text":"Dát lea buorre.","errors":[{"form":"lea","start":4,"end":7,"error_id":"err-msyn-agr","title":"Kongruens","description":"","suggestions":["leat"]}],"encoding":"utf-8"}'
    ;;
  *)
    printf '{"text":"%s","errors":[],"encoding":"utf-8"}\n' "$input"
    ;;
esac
"#;

fn install(bin: &Path, name: &str, script: &str) {
    let path = bin.join(name);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Helper to install both stub engines into `bin/` and return a `PATH` with them first
pub fn install_stubs(language: &Path) -> OsString {
    let bin = language.join("bin");
    fs::create_dir(&bin).unwrap();
    install(&bin, "divvun-checker", STUB_CHECKER);
    install(&bin, "divvun-runtime", STUB_RUNTIME);

    let mut paths = vec![bin];
    if let Some(path) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&path));
    }
    std::env::join_paths(paths).unwrap()
}
