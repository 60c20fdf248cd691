pub const API_NAME: &str = "[cartexto-api]";
