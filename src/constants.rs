//! Static configuration values shared by the public booking site and the
//! admin dashboard API.

pub mod pagination {
    pub const ITEMS_PER_PAGE: usize = 10;
    pub const MAX_ITEMS_PER_PAGE: usize = 50;
}

pub mod auth {
    /// Lifetime of the admin session cookie, in seconds.
    pub const TOKEN_MAX_AGE: i64 = 60 * 60 * 24 * 7;
    pub const TOKEN_COOKIE_NAME: &str = "admin_token";
    /// Client-side warning threshold before the session runs out.
    pub const SESSION_TIMEOUT_WARNING_SECS: i64 = 5 * 60;
}

pub mod operating_hours {
    pub const DEFAULT_OPEN: u32 = 6;
    pub const DEFAULT_CLOSE: u32 = 22;
    pub const MIN_HOUR: u32 = 0;
    pub const MAX_HOUR: u32 = 23;
}

pub mod booking {
    pub const MAX_SLOTS_PER_BOOKING: usize = 10;
    pub const CART_EXPIRY_MINUTES: i64 = 15;
    pub const MIN_ADVANCE_BOOKING_HOURS: i64 = 2;
    pub const MAX_ADVANCE_BOOKING_DAYS: i64 = 30;
    /// Cookie carrying the opaque cart key.
    pub const CART_STORAGE_KEY: &str = "booking_cart";
}

pub mod validation {
    pub const MIN_NAME_LENGTH: usize = 3;
    pub const MAX_NAME_LENGTH: usize = 100;
    pub const MIN_PASSWORD_LENGTH: usize = 8;
    pub const MAX_PASSWORD_LENGTH: usize = 50;
}

pub mod api {
    /// Per-call timeout for the upstream GraphQL endpoint.
    pub const UPSTREAM_TIMEOUT_MS: u64 = 8000;
    pub const RETRY_COUNT: u32 = 0;
}

pub mod messages {
    pub const GENERIC: &str = "Terjadi kesalahan. Silakan coba lagi.";
    pub const NETWORK: &str = "Koneksi bermasalah. Periksa internet Anda.";
    pub const UNAUTHORIZED: &str = "Sesi Anda telah berakhir. Silakan login kembali.";
    pub const NOT_FOUND: &str = "Data tidak ditemukan.";
    pub const SERVER: &str = "Server sedang bermasalah. Coba beberapa saat lagi.";
    pub const SLOT_CONFLICT: &str = "Slot waktu sudah dibooking. Silakan pilih slot lain.";
    pub const INVALID_LOGIN: &str = "Email atau password yang Anda masukkan salah.";
    pub const ALL_SLOTS_AVAILABLE: &str = "Semua slot waktu tersedia";
}
