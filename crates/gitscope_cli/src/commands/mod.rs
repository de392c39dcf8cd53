pub(crate) mod auth;
pub(crate) mod commits;
pub(crate) mod favorites;
pub(crate) mod meta;
pub(crate) mod repos;
pub(crate) mod shared;
pub(crate) mod show;
