use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of an element in the collage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

/// Stable identifier of a control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ControlPointId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPointId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ControlPointId {
    fn default() -> Self {
        Self::new()
    }
}

// Short form for log lines and debug labels.
impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        write!(f, "el-{}", &simple[..8])
    }
}

impl fmt::Display for ControlPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        write!(f, "pt-{}", &simple[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ElementId::new(), ElementId::new());
        assert_ne!(ControlPointId::new(), ControlPointId::new());
    }

    #[test]
    fn test_display_is_short() {
        let id = ElementId::new();
        let shown = id.to_string();
        assert!(shown.starts_with("el-"));
        assert_eq!(shown.len(), 11);
    }
}
