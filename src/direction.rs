use serde::Deserialize;

/// Which way a packet was travelling when the proxy saw it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    ToServer,
    ToClient,
}

impl Direction {
    /// Header tag written in front of the packet name.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::ToServer => "[CLIENT > SERVER] ",
            Self::ToClient => "[CLIENT < SERVER] ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_point_the_right_way() {
        assert_eq!(Direction::ToServer.marker(), "[CLIENT > SERVER] ");
        assert_eq!(Direction::ToClient.marker(), "[CLIENT < SERVER] ");
    }

    #[test]
    fn deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Entry {
            direction: Direction,
        }

        let entry: Entry = toml::from_str(r#"direction = "to_client""#).unwrap();
        assert_eq!(entry.direction, Direction::ToClient);
    }
}
