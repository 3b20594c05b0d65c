use super::card::Card;

/// Prefix of the inline error placeholder.
pub const ERROR_PREFIX: &str = "오류: ";
pub const LOADING_MESSAGE: &str = "로딩 중...";

/// What a list view currently shows. Each refresh replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Never refreshed.
    #[default]
    Idle,
    Loading,
    /// The query succeeded with no rows.
    Empty(&'static str),
    /// The query failed; holds the full placeholder text.
    Failed(String),
    Cards(Vec<Card>),
}

impl ViewState {
    pub fn failed(message: impl std::fmt::Display) -> Self {
        ViewState::Failed(format!("{}{}", ERROR_PREFIX, message))
    }

    /// Placeholder text shown instead of cards, if any.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ViewState::Idle | ViewState::Cards(_) => None,
            ViewState::Loading => Some(LOADING_MESSAGE),
            ViewState::Empty(message) => Some(*message),
            ViewState::Failed(message) => Some(message.as_str()),
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            ViewState::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Failed(_))
    }
}
