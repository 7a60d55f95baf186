//! Экранирование имён и строк по тем же правилам удвоения, что понимает лексер

/// Оборачивает идентификатор в `[...]` или `"..."`, удваивая закрывающий символ.
///
/// Пустой идентификатор возвращается без изменений.
pub fn encode_name(name: &str, use_quotes: bool) -> String {
    if name.is_empty() {
        return String::new();
    }

    if use_quotes {
        wrap_doubled(name, '"', '"')
    } else {
        wrap_doubled(name, '[', ']')
    }
}

/// Вариант [`encode_name`], пропускающий отсутствующее имя
pub fn encode_name_opt(name: Option<&str>, use_quotes: bool) -> Option<String> {
    name.map(|name| encode_name(name, use_quotes))
}

/// Обратное преобразование: снимает `[...]` или `"..."` и схлопывает удвоения.
///
/// Текст без ограничителей возвращается как есть.
pub fn decode_name(encoded: &str) -> String {
    let (open, close) = match encoded.chars().next() {
        Some('[') => ('[', ']'),
        Some('"') => ('"', '"'),
        _ => return encoded.to_string(),
    };

    let inner = match encoded
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
    {
        Some(inner) => inner,
        None => return encoded.to_string(),
    };

    let doubled: String = [close, close].iter().collect();
    inner.replace(&doubled, &close.to_string())
}

/// Строковый литерал `'...'` или `N'...'` с удвоенными апострофами
pub fn quote_string(value: &str, unicode: bool) -> String {
    let quoted = wrap_doubled(value, '\'', '\'');
    if unicode {
        format!("N{}", quoted)
    } else {
        quoted
    }
}

fn wrap_doubled(value: &str, open: char, close: char) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push(open);
    for ch in value.chars() {
        if ch == close {
            result.push(close);
        }
        result.push(ch);
    }
    result.push(close);
    result
}
