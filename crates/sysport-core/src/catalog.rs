//! Curated source file lists.
//!
//! Both lists came from
//! `go list -f '{{.ImportPath}}: {{.GoFiles}}' -tags linux,arm64 <pkg>`
//! with obviously non-linux names (`_darwin`, `_bsd`, ...) dropped by hand.
//! They are kept as data on purpose: regenerating them means re-running that
//! command and reviewing the result, not scanning a directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const SYSCALL_FILES: &[&str] = &[
    "asan0.go",
    "dirent.go",
    "endian_little.go",
    "env_unix.go",
    "exec_linux.go",
    "exec_unix.go",
    "flock_linux.go",
    "forkpipe2.go",
    "lsf_linux.go",
    "msan0.go",
    "net.go",
    "netlink_linux.go",
    "rlimit.go",
    "rlimit_stub.go",
    "setuidgid_linux.go",
    "sockcmsg_linux.go",
    "sockcmsg_unix.go",
    "sockcmsg_unix_other.go",
    "syscall.go",
    "syscall_linux.go",
    "syscall_linux_accept4.go",
    "syscall_linux_arm64.go",
    "syscall_unix.go",
    "time_nofake.go",
    "timestruct.go",
    "zerrors_linux_arm64.go",
    "zsyscall_linux_arm64.go",
    "zsysnum_linux_arm64.go",
    "ztypes_linux_arm64.go",
];

const UNIX_FILES: &[&str] = &[
    "affinity_linux.go",
    "aliases.go",
    "bluetooth_linux.go",
    "constants.go",
    "dev_linux.go",
    "dirent.go",
    "endian_little.go",
    "env_unix.go",
    "fcntl.go",
    "fdset.go",
    "ifreq_linux.go",
    "ioctl_linux.go",
    "ioctl_unsigned.go",
    "mremap.go",
    "pagesize_unix.go",
    "race0.go",
    "readdirent_getdents.go",
    "sockcmsg_linux.go",
    "sockcmsg_unix.go",
    "sockcmsg_unix_other.go",
    "syscall.go",
    "syscall_linux.go",
    "syscall_linux_arm64.go",
    "syscall_linux_gc.go",
    "syscall_unix.go",
    "syscall_unix_gc.go",
    "sysvshm_linux.go",
    "sysvshm_unix.go",
    "timestruct.go",
    "zerrors_linux.go",
    "zerrors_linux_arm64.go",
    "zptrace_armnn_linux.go",
    "zptrace_linux_arm64.go",
    "zsyscall_linux.go",
    "zsyscall_linux_arm64.go",
    "zsysnum_linux_arm64.go",
    "ztypes_linux.go",
    "ztypes_linux_arm64.go",
];

/// The two source catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Catalog {
    /// Standard library `syscall`, read from GOROOT
    Syscall,
    /// `golang.org/x/sys/unix`
    Unix,
}

impl Catalog {
    pub const ALL: [Catalog; 2] = [Catalog::Syscall, Catalog::Unix];

    /// Built-in ordered file list
    pub fn files(self) -> &'static [&'static str] {
        match self {
            Catalog::Syscall => SYSCALL_FILES,
            Catalog::Unix => UNIX_FILES,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Catalog::Syscall => "syscall",
            Catalog::Unix => "unix",
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Catalog {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "syscall" => Ok(Catalog::Syscall),
            "unix" => Ok(Catalog::Unix),
            other => Err(format!("unknown catalog: {other}")),
        }
    }
}
