use crate::commands::CmdResult;
use crate::error::Result;
use crate::landing::{LandingPage, LandingView, Section};

#[derive(Debug, Clone, Default)]
pub struct LandingOptions {
    /// Limit output to one anchored section (`home`, `services`, `about`, `contact`)
    pub section: Option<String>,
    pub menu_open: bool,
}

pub fn run(options: &LandingOptions) -> Result<CmdResult> {
    let sections = match &options.section {
        Some(anchor) => vec![anchor.parse::<Section>()?],
        None => Section::all().to_vec(),
    };

    Ok(CmdResult::default().with_landing(LandingView {
        page: LandingPage::energiatech(),
        sections,
        menu_open: options.menu_open,
    }))
}
