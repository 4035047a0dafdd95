pub mod common {
    pub const INITIALIZED: &str = "🗞️ Haber Gündem - Premium News Portal Initialized";
}

pub mod newsletter {
    pub const SUBSCRIBED: &str = "✓ Abone Olundu!";
}

pub mod toast {
    pub const LINK_COPIED: &str = "Link kopyalandı!";
    pub const SEARCH_COMING_SOON: &str = "Arama özelliği yakında!";
}
