#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLibrary {
    pub artifact_id: String,
    pub name: String,
    pub version: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub open_source: bool,
    pub website: Option<String>,
    pub repository: Option<String>,
    pub owner: Option<String>,
    pub year: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub configuration: String,
    pub libraries: Vec<RenderableLibrary>,
}
