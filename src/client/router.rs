use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    admin::{AdminLocations, AdminNodes, AdminUsers},
    server::{FileEdit, ServerBackups, ServerDirectory, ServerFiles, ServerLayout, ServerSchedules},
    Dashboard, Login, NotFound,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/auth/login")]
    Login {},

    #[layout(RequiresLoggedIn)]
    #[route("/")]
    Dashboard {},

    #[nest("/server/:id")]
        #[layout(ServerLayout)]
        #[route("/files")]
        ServerFiles { id: String },

        #[route("/files/directory/:..segments")]
        ServerDirectory { id: String, segments: Vec<String> },

        #[route("/files/edit/:..segments")]
        FileEdit { id: String, segments: Vec<String> },

        #[route("/backups")]
        ServerBackups { id: String },

        #[route("/schedules")]
        ServerSchedules { id: String },
        #[end_layout]
    #[end_nest]
    #[end_layout]

    #[layout(RequiresAdmin)]
    #[nest("/admin")]
        #[route("/nodes")]
        AdminNodes {},

        #[route("/locations")]
        AdminLocations {},

        #[route("/users")]
        AdminUsers {},
    #[end_nest]
    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Route showing the directory at logical path `path` of server `id`.
    pub fn directory(id: &str, path: &str) -> Self {
        let segments = split_segments(path);
        if segments.is_empty() {
            Route::ServerFiles { id: id.to_string() }
        } else {
            Route::ServerDirectory {
                id: id.to_string(),
                segments,
            }
        }
    }

    pub fn edit_file(id: &str, path: &str) -> Self {
        Route::FileEdit {
            id: id.to_string(),
            segments: split_segments(path),
        }
    }
}

fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
