use unidb::model::RecordKind;

/// One entry of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add(RecordKind),
    Find(RecordKind),
    Delete(RecordKind),
    List(RecordKind),
    Count(RecordKind),
    LoadSample,
    Clear,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// Maps a menu number (1-14) to its action.
    pub fn from_number(n: i64) -> Option<Self> {
        let per_kind = |offset: i64, kind: RecordKind| match n - offset {
            1 => Some(MenuChoice::Add(kind)),
            2 => Some(MenuChoice::Find(kind)),
            3 => Some(MenuChoice::Delete(kind)),
            4 => Some(MenuChoice::List(kind)),
            5 => Some(MenuChoice::Count(kind)),
            _ => None,
        };

        match n {
            1..=5 => per_kind(0, RecordKind::Student),
            6..=10 => per_kind(5, RecordKind::Faculty),
            11 => Some(MenuChoice::LoadSample),
            12 => Some(MenuChoice::Clear),
            13 => Some(MenuChoice::Statistics),
            14 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
