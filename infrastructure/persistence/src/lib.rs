pub mod db;
pub mod local_storage {
    pub mod entity;
    pub mod repository;
}
