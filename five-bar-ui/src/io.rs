use anyhow::Context;
use five_bar::FiveBar;
use std::path::Path;

/// Parse a linkage from RON text and check it.
pub(crate) fn parse_cfg(s: &str) -> anyhow::Result<FiveBar> {
    let fb = ron::from_str::<FiveBar>(s)?;
    fb.check()?;
    Ok(fb)
}

pub(crate) fn load_cfg(path: &Path) -> anyhow::Result<FiveBar> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading linkage file {}", path.display()))?;
    parse_cfg(&s).with_context(|| format!("loading linkage file {}", path.display()))
}

pub(crate) fn save_cfg(path: &Path, fb: &FiveBar) -> anyhow::Result<()> {
    let s = ron::ser::to_string_pretty(fb, Default::default())?;
    std::fs::write(path, s).with_context(|| format!("writing linkage file {}", path.display()))
}
