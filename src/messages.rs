// src/messages.rs
// User-facing strings returned in `{ "error": ... }` bodies.

pub const UNAUTHORIZED: &str = "Требуется авторизация";
pub const INTERNAL_ERROR: &str = "Внутренняя ошибка сервера";

pub const CLEANUP_FAILED: &str = "Не удалось очистить истекшие прокси";
pub const PLANS_LOAD_FAILED: &str = "Не удалось загрузить тарифы";

pub const REGISTRATION_FAILED: &str = "Ошибка регистрации";
pub const INVALID_REQUEST_BODY: &str = "Некорректный запрос";
pub const USERNAME_TAKEN: &str = "Пользователь с таким именем уже существует";
pub const INVALID_CREDENTIALS: &str = "Неверное имя пользователя или пароль";

pub const USERNAME_LENGTH: &str = "Имя пользователя должно содержать от 3 до 32 символов";
pub const USERNAME_CHARSET: &str =
    "Имя пользователя может содержать только латинские буквы, цифры, точку, дефис и подчёркивание";
pub const PASSWORD_TOO_SHORT: &str = "Пароль должен содержать не менее 6 символов";
pub const PASSWORD_TOO_LONG: &str = "Пароль не должен превышать 72 байта";
pub const FULL_NAME_REQUIRED: &str = "Укажите полное имя";
pub const FULL_NAME_TOO_LONG: &str = "Полное имя не должно превышать 100 символов";
