use std::collections::HashMap;

use derive_builder::Builder;
use serde::Deserialize;
use strum::{Display, EnumString};

use crate::types::{FlexibleBool, FlexibleTime};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename = "MediaContainer")]
pub struct DirectoryContainer {
    #[serde(alias = "Directory", default)]
    pub directory: Vec<Directory>,
}

/// A library section on the server
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    #[serde(alias = "Location", default)]
    pub locations: Vec<Location>,
    pub agent: Option<String>,
    #[serde(default)]
    pub allow_sync: FlexibleBool,
    pub art: Option<String>,
    pub composite: Option<String>,
    #[serde(default)]
    pub created_at: FlexibleTime,
    #[serde(default)]
    pub filters: FlexibleBool,
    pub key: String,
    pub language: Option<String>,
    #[serde(default)]
    pub refreshing: FlexibleBool,
    pub scanner: Option<String>,
    pub thumb: Option<String>,
    pub title: String,
    #[serde(alias = "type")]
    pub directory_type: String,
    #[serde(default)]
    pub updated_at: FlexibleTime,
    pub uuid: Option<String>,
}

impl Directory {
    pub fn id(&self) -> &str {
        &self.key
    }

    pub fn is_movie(&self) -> bool {
        self.directory_type == "movie"
    }

    pub fn is_show(&self) -> bool {
        self.directory_type == "show"
    }

    pub fn is_music(&self) -> bool {
        self.directory_type == "artist"
    }
}

/// The path of a server directory
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub path: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LibraryType {
    #[default]
    Movie,
    Show,
    Artist,
    Photo,
}

/// Parameters required to create a library
#[derive(Builder, Clone, Debug)]
pub struct CreateLibraryParams {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub location: String,
    pub library_type: LibraryType,
    #[builder(setter(into, strip_option), default)]
    pub agent: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub scanner: Option<String>,
    #[builder(setter(into, strip_option), default)]
    pub language: Option<String>,
}

impl CreateLibraryParams {
    pub(crate) fn to_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::from([
            ("name".to_string(), self.name.clone()),
            ("location".to_string(), self.location.clone()),
            ("type".to_string(), self.library_type.to_string()),
        ]);

        if let Some(agent) = &self.agent {
            params.insert("agent".to_string(), agent.clone());
        }
        if let Some(scanner) = &self.scanner {
            params.insert("scanner".to_string(), scanner.clone());
        }
        if let Some(language) = &self.language {
            params.insert("language".to_string(), language.clone());
        }

        params
    }
}
