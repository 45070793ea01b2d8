/// Package managers the installer knows how to drive, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    pub const PRIORITY: [PackageManager; 2] = [PackageManager::Yarn, PackageManager::Npm];

    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Executable to spawn; Windows installs ship `.cmd` shims.
    pub fn program(self) -> String {
        if cfg!(windows) { format!("{}.cmd", self.name()) } else { self.name().to_string() }
    }

    pub fn version_args(self) -> &'static [&'static str] {
        &["-v"]
    }

    pub fn install_args(self) -> &'static [&'static str] {
        match self {
            PackageManager::Yarn => &[],
            PackageManager::Npm => &["install"],
        }
    }

    /// Human-readable install command, as shown in the summary.
    pub fn install_command(self) -> String {
        std::iter::once(self.name())
            .chain(self.install_args().iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
