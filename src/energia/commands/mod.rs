use crate::config::EnergiaConfig;
use crate::landing::LandingView;
use crate::view_state::ViewState;

pub mod config;
pub mod filter;
pub mod landing;
pub mod list;
pub mod sort;
pub mod view;

pub use view::TableView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub table: Option<TableView>,
    pub state: Option<ViewState>,
    pub landing: Option<LandingView>,
    pub config: Option<EnergiaConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_table(mut self, table: TableView, state: ViewState) -> Self {
        self.table = Some(table);
        self.state = Some(state);
        self
    }

    pub fn with_landing(mut self, landing: LandingView) -> Self {
        self.landing = Some(landing);
        self
    }

    pub fn with_config(mut self, config: EnergiaConfig) -> Self {
        self.config = Some(config);
        self
    }
}
