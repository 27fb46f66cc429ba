use crate::model::Person;

/// Modal state of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// A one-button message box, dismissed with Enter or Esc.
    Message { title: String, content: String },
}

/// One visible line of the sectioned list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    /// Section header carrying its title.
    Header(String),
    /// A person row. `fresh` marks rows inserted or moved by the last
    /// update while the highlight is still running.
    Person { person: Person, fresh: bool },
}

