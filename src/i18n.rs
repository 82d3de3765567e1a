// ==========================================
// Модуль интернационализации (i18n)
// ==========================================
// Библиотека rust-i18n,
// русский (по умолчанию) и английский
// ==========================================
// Макрос rust_i18n::i18n! инициализирован в lib.rs
// ==========================================

/// Текущий язык
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Установить язык
///
/// # Параметры
/// - locale: код языка ("ru" или "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Перевод сообщения (без параметров)
///
/// # Пример
/// ```no_run
/// use furniture_inventory::i18n::t;
/// let msg = t("common.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Перевод сообщения (с параметрами)
///
/// # Пример
/// ```no_run
/// use furniture_inventory::i18n::t_with_args;
/// let msg = t_with_args("import.file_not_found", &[("path", "/tmp/data.csv")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Локаль rust-i18n - глобальное состояние, а тесты Rust выполняются
    // параллельно; сериализуем тесты локали, чтобы они не мешали друг другу.
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ru");
        assert_eq!(current_locale(), "ru");
    }

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ru");
        assert_eq!(current_locale(), "ru");

        set_locale("en");
        assert_eq!(current_locale(), "en");

        set_locale("ru");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ru");
        assert_eq!(t("common.success"), "Операция выполнена");

        set_locale("en");
        assert_eq!(t("common.success"), "Operation successful");

        set_locale("ru");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ru");
        let msg = t_with_args("import.file_not_found", &[("path", "/tmp/data.csv")]);
        assert!(msg.contains("/tmp/data.csv"));
        assert!(msg.contains("Файл не существует"));

        set_locale("en");
        let msg = t_with_args("import.file_not_found", &[("path", "/tmp/data.csv")]);
        assert!(msg.contains("/tmp/data.csv"));
        assert!(msg.contains("File not found"));

        set_locale("ru");
    }
}
