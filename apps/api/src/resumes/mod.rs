// Resume storage API: load and autosave a user's resume.

pub mod handlers;
