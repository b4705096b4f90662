//! Best-effort translation of raw backend error messages into the
//! Indonesian copy shown to users. Pattern matching over known upstream
//! error substrings, degrading to a generic message when nothing matches.

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedError {
    pub title: Option<String>,
    pub message: String,
    pub is_user_friendly: bool,
}

impl ParsedError {
    fn known(title: &str, message: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            message: message.to_string(),
            is_user_friendly: true,
        }
    }
}

fn parse_unique_constraint(error: &str) -> Option<ParsedError> {
    if error.contains("Unique constraint failed") && error.contains("BookingDetail") {
        return Some(ParsedError::known(
            "Slot Tidak Tersedia",
            "Slot waktu yang dipilih sudah dibooking oleh pengguna lain. \
             Silakan pilih slot yang berbeda atau coba lagi.",
        ));
    }

    if error.contains("Unique constraint failed") {
        return Some(ParsedError::known(
            "Data Sudah Ada",
            "Data dengan informasi tersebut sudah ada di sistem. Silakan periksa kembali.",
        ));
    }

    None
}

fn parse_foreign_key(error: &str) -> Option<ParsedError> {
    if error.contains("Foreign key constraint") {
        return Some(ParsedError::known(
            "Data Tidak Valid",
            "Data yang Anda pilih tidak valid atau sudah tidak tersedia. \
             Silakan refresh halaman dan coba lagi.",
        ));
    }

    None
}

fn parse_not_found(error: &str) -> Option<ParsedError> {
    if error.contains("Record to update not found") || error.contains("Record to delete not found")
    {
        return Some(ParsedError::known(
            "Data Tidak Ditemukan",
            "Data yang Anda cari sudah tidak ada atau telah dihapus.",
        ));
    }

    None
}

fn parse_auth_error(error: &str) -> Option<ParsedError> {
    if error.contains("Invalid email or password") {
        return Some(ParsedError::known(
            "Login Gagal",
            "Email atau password yang Anda masukkan salah. Silakan periksa kembali.",
        ));
    }

    if error.contains("Unauthorized") || error.contains("unauthorized") {
        return Some(ParsedError::known(
            "Akses Ditolak",
            "Sesi Anda telah berakhir. Silakan login kembali.",
        ));
    }

    if error.contains("Token expired") || error.contains("jwt expired") {
        return Some(ParsedError::known(
            "Sesi Berakhir",
            "Sesi Anda telah berakhir. Silakan login kembali untuk melanjutkan.",
        ));
    }

    None
}

fn parse_validation_error(error: &str) -> Option<ParsedError> {
    if error.contains("validation") || error.contains("invalid") {
        return Some(ParsedError::known(
            "Data Tidak Valid",
            "Data yang Anda masukkan tidak sesuai format. Silakan periksa kembali.",
        ));
    }

    None
}

fn parse_network_error(error: &str) -> Option<ParsedError> {
    if error.contains("timeout")
        || error.contains("ECONNREFUSED")
        || error.contains("Network error")
        || error.contains("unreachable")
    {
        return Some(ParsedError::known(
            "Koneksi Bermasalah",
            "Tidak dapat terhubung ke server. Periksa koneksi internet Anda \
             atau coba beberapa saat lagi.",
        ));
    }

    if error.contains("502") || error.contains("Bad Gateway") {
        return Some(ParsedError::known(
            "Server Tidak Tersedia",
            "Server sedang mengalami gangguan. Mohon coba beberapa saat lagi.",
        ));
    }

    None
}

fn generic_error() -> ParsedError {
    ParsedError {
        title: Some("Terjadi Kesalahan".to_string()),
        message: "Mohon maaf, terjadi kesalahan pada sistem. Silakan coba lagi \
                  atau hubungi administrator jika masalah berlanjut."
            .to_string(),
        is_user_friendly: true,
    }
}

pub fn parse_backend_error(error: &str) -> ParsedError {
    let parsers: [fn(&str) -> Option<ParsedError>; 6] = [
        parse_unique_constraint,
        parse_foreign_key,
        parse_not_found,
        parse_auth_error,
        parse_validation_error,
        parse_network_error,
    ];

    for parser in parsers {
        if let Some(parsed) = parser(error) {
            return parsed;
        }
    }

    // Unmatched: scrub and pass through unless it still looks internal.
    let clean = error.trim();
    if clean.len() < 5 || clean.contains("prisma") || clean.contains("resolver") {
        return generic_error();
    }

    ParsedError {
        title: None,
        message: clean.to_string(),
        is_user_friendly: false,
    }
}

pub fn user_friendly_error(error: &str) -> String {
    let parsed = parse_backend_error(error);
    match parsed.title {
        Some(title) => format!("{title}: {}", parsed.message),
        None => parsed.message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_conflict_translation() {
        let raw = "Unique constraint failed on the constraint: `BookingDetail_fieldId_bookingDate_startHour_key`";
        let parsed = parse_backend_error(raw);
        assert_eq!(parsed.title.as_deref(), Some("Slot Tidak Tersedia"));
        assert!(parsed.is_user_friendly);
    }

    #[test]
    fn test_generic_unique_constraint() {
        let parsed = parse_backend_error("Unique constraint failed on the fields: (`email`)");
        assert_eq!(parsed.title.as_deref(), Some("Data Sudah Ada"));
    }

    #[test]
    fn test_foreign_key_translation() {
        let parsed = parse_backend_error("Foreign key constraint violated: `fieldId`");
        assert_eq!(parsed.title.as_deref(), Some("Data Tidak Valid"));
    }

    #[test]
    fn test_not_found_translation() {
        let parsed = parse_backend_error("Record to update not found.");
        assert_eq!(parsed.title.as_deref(), Some("Data Tidak Ditemukan"));
    }

    #[test]
    fn test_invalid_login_translation() {
        let parsed = parse_backend_error("Invalid email or password");
        assert_eq!(parsed.title.as_deref(), Some("Login Gagal"));
    }

    #[test]
    fn test_expired_token_translation() {
        let parsed = parse_backend_error("jwt expired");
        assert_eq!(parsed.title.as_deref(), Some("Sesi Berakhir"));
    }

    #[test]
    fn test_timeout_translation() {
        let parsed = parse_backend_error("connect ECONNREFUSED 127.0.0.1:3001");
        assert_eq!(parsed.title.as_deref(), Some("Koneksi Bermasalah"));
    }

    #[test]
    fn test_internal_noise_degrades_to_generic() {
        let parsed = parse_backend_error("error in prisma resolver chain");
        assert_eq!(parsed.title.as_deref(), Some("Terjadi Kesalahan"));
    }

    #[test]
    fn test_short_message_degrades_to_generic() {
        let parsed = parse_backend_error("err");
        assert_eq!(parsed.title.as_deref(), Some("Terjadi Kesalahan"));
    }

    #[test]
    fn test_unknown_message_passes_through() {
        let parsed = parse_backend_error("Lapangan sedang dalam perawatan");
        assert_eq!(parsed.title, None);
        assert!(!parsed.is_user_friendly);
        assert_eq!(parsed.message, "Lapangan sedang dalam perawatan");
    }

    #[test]
    fn test_user_friendly_error_formats_title() {
        let msg = user_friendly_error("Record to delete not found.");
        assert_eq!(
            msg,
            "Data Tidak Ditemukan: Data yang Anda cari sudah tidak ada atau telah dihapus."
        );
    }
}
