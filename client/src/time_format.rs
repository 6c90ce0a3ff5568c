use chrono::{NaiveDate, NaiveDateTime};

/// Short pt-BR date, e.g. `04/03/2021`.
pub fn format_date_pt_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// pt-BR date and time, e.g. `19/10/2026, 14:03:05`.
pub fn format_datetime_pt_br(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Current local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
