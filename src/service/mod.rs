pub mod documents;
pub mod file_store;
pub mod password;

/// Today's local date as stored in every `date`/`created_at` column.
pub fn today() -> String {
    chrono::Local::now().format("%d-%m-%Y").to_string()
}
