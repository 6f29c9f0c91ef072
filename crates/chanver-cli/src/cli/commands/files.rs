//! `chanver files <version>` – release file names for a platform.

use chanver_core::artifact::{host_os_arch, release_files, ReleaseFiles};
use chanver_core::config::ChanverConfig;

pub fn run_files(cfg: &ChanverConfig, version: &str, os_arch: Option<&str>) {
    let os_arch = os_arch.map(str::to_string).unwrap_or_else(host_os_arch);
    print!("{}", format_files(&release_files(&cfg.package, version, &os_arch)));
}

pub(crate) fn format_files(files: &ReleaseFiles) -> String {
    format!(
        "program  {}\nhash     {}\nsig      {}\n",
        files.program, files.hash, files.sig
    )
}
