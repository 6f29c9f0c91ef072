//! Release file names published for one version/platform.

use crate::manifest::{MANIFEST_FILE, SIGNATURE_FILE};

/// Files making up one release for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseFiles {
    /// Hash manifest (`SHA256SUMS`).
    pub hash: String,
    /// Detached manifest signature (`SHA256SUMS.sig`).
    pub sig: String,
    /// The program binary.
    pub program: String,
}

/// `{package}-{os_arch}-{version}{ext}`, where `ext` is `.exe` for Windows targets.
pub fn program_file_name(package: &str, version: &str, os_arch: &str) -> String {
    let ext = if os_arch.contains("windows") { ".exe" } else { "" };
    format!("{package}-{os_arch}-{version}{ext}")
}

pub fn release_files(package: &str, version: &str, os_arch: &str) -> ReleaseFiles {
    ReleaseFiles {
        hash: MANIFEST_FILE.to_string(),
        sig: SIGNATURE_FILE.to_string(),
        program: program_file_name(package, version, os_arch),
    }
}

/// Platform of the running binary in `os-arch` form (`linux-amd64`, `darwin-arm64`, ...).
pub fn host_os_arch() -> String {
    os_arch(std::env::consts::OS, std::env::consts::ARCH)
}

fn os_arch(os: &str, arch: &str) -> String {
    let os = match os {
        "macos" => "darwin",
        other => other,
    };
    let arch = match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        other => other,
    };
    format!("{os}-{arch}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_program_has_no_extension() {
        let files = release_files("chanver", "v1.1.1", "linux-amd64");
        assert_eq!(files.program, "chanver-linux-amd64-v1.1.1");
        assert_eq!(files.hash, "SHA256SUMS");
        assert_eq!(files.sig, "SHA256SUMS.sig");
    }

    #[test]
    fn windows_program_gets_exe() {
        assert_eq!(
            program_file_name("chanver", "v1.1.1", "windows-amd64"),
            "chanver-windows-amd64-v1.1.1.exe"
        );
    }

    #[test]
    fn platform_names_are_mapped() {
        assert_eq!(os_arch("linux", "x86_64"), "linux-amd64");
        assert_eq!(os_arch("macos", "aarch64"), "darwin-arm64");
        assert_eq!(os_arch("windows", "x86"), "windows-386");
        assert_eq!(os_arch("freebsd", "riscv64"), "freebsd-riscv64");
    }
}
