// Contact details and external assets for the firm.

// Placeholder number, swap in the firm's real WhatsApp line before launch.
pub const WHATSAPP_PHONE: &str = "5531999999999";

pub const WHATSAPP_MESSAGE: &str =
    "Olá! Gostaria de saber mais sobre os serviços jurídicos do escritório.";

pub const LOGO_URL: &str =
    "https://i.ibb.co/7659r9R/Design-sem-nome-2025-06-13-T120931-388.png";

pub const WHATSAPP_ICON_URL: &str =
    "https://img.icons8.com/material-outlined/96/whatsapp.png";
