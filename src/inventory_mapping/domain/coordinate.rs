/// The (groupId, artifactId, version) triple of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCoordinate {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl ResolvedCoordinate {
    pub fn new(group_id: String, artifact_id: String, version: String) -> Self {
        Self {
            group_id,
            artifact_id,
            version,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn into_parts(self) -> (String, String, String) {
        (self.group_id, self.artifact_id, self.version)
    }
}

impl std::fmt::Display for ResolvedCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
