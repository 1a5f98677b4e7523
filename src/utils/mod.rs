use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Value of the `Status` field on successful mutations.
pub mod status_messages {
    pub const CREATED: &str = "Berhasil";
    pub const UPDATED: &str = "Berhasil Perbarui Data";
    pub const DELETED: &str = "Berhasil Menghapus Data";
}
