/// A visible (non-hidden) playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    pub position: i64,
    pub date_created: String,
    pub date_modified: String,
}
