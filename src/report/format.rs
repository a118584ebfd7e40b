use crate::types::BuildReport;

impl BuildReport {
    /// One `label: path` line per artifact; absent paths are left empty
    pub fn paths_string(&self) -> String {
        format!(
            "buildRoot: {},\napk: {},\nipa: {},\nlibUE4: {},\narm64: {},\nunknown: {},\npak_engine: {},\npak_project: {}\n",
            self.build_root.display_path(),
            self.apk.display_path(),
            self.ipa.display_path(),
            self.lib_ue4.display_path(),
            self.arm64.display_path(),
            self.unknown.display_path(),
            self.pak_engine.display_path(),
            self.pak_project.display_path(),
        )
    }

    /// One `label: bytes` line per artifact
    ///
    /// The build root is not measured and has no line here, so this report
    /// has one line fewer than [`BuildReport::paths_string`].
    pub fn sizes_string(&self) -> String {
        format!(
            "apk: {},\nipa: {},\nlibUE4: {},\narm64: {},\nunknown: {},\npak_engine: {},\npak_project: {}\n",
            self.apk.size,
            self.ipa.size,
            self.lib_ue4.size,
            self.arm64.size,
            self.unknown.size,
            self.pak_engine.size,
            self.pak_project.size,
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
