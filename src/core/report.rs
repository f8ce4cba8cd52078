use crate::domain::model::{LanguageStats, ProviderReport};

pub const HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

pub const MISSING_AVERAGE: &str = "N/A";

impl ProviderReport {
    pub fn render(&self) -> String {
        render_table(&self.title, &self.rows)
    }
}

/// Bordered ASCII table with the title embedded in the top border.
///
/// Rows keep the order they are given in. Widths are measured in chars so
/// Cyrillic headers line up.
pub fn render_table(title: &str, rows: &[(String, LanguageStats)]) -> String {
    let mut table: Vec<[String; 4]> = Vec::with_capacity(rows.len() + 1);
    table.push(HEADERS.map(String::from));
    for (language, stats) in rows {
        table.push([
            language.clone(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            format_average(stats.average_salary),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &table {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut lines = Vec::with_capacity(table.len() + 3);
    lines.push(titled_border(&border, title));
    lines.push(format_row(&table[0], &widths));
    lines.push(border.clone());
    for row in &table[1..] {
        lines.push(format_row(row, &widths));
    }
    lines.push(border);

    lines.join("\n")
}

fn format_average(average_salary: u64) -> String {
    if average_salary == 0 {
        MISSING_AVERAGE.to_string()
    } else {
        average_salary.to_string()
    }
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    format!("+{}+", segments.join("+"))
}

// 標題放不下時退回一般邊框
fn titled_border(border: &str, title: &str) -> String {
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > border.chars().count() {
        return border.to_string();
    }

    let mut line = String::from("+");
    line.push_str(title);
    line.extend(border.chars().skip(1 + title_len));
    line
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {:<width$} ", cell, width = *width))
        .collect();
    format!("|{}|", cells.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(line: &str) -> Vec<String> {
        line.trim_matches('|')
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    fn stats(found: u64, processed: u64, average: u64) -> LanguageStats {
        LanguageStats {
            vacancies_found: found,
            vacancies_processed: processed,
            average_salary: average,
        }
    }

    #[test]
    fn test_render_table_layout() {
        let rows = vec![
            ("Python".to_string(), stats(50, 2, 150)),
            ("1С".to_string(), stats(3, 0, 0)),
        ];

        let rendered = render_table("HeadHunter Moscow", &rows);
        let lines: Vec<&str> = rendered.lines().collect();

        // 上框、表頭、分隔線、兩列、下框
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("+HeadHunter Moscow-"));
        assert_eq!(cells(lines[1]), HEADERS.to_vec());
        assert!(lines[2].starts_with("+---"));
        assert_eq!(cells(lines[3]), vec!["Python", "50", "2", "150"]);
        assert_eq!(cells(lines[4]), vec!["1С", "3", "0", "N/A"]);
        assert_eq!(lines[2], lines[5]);

        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let rows = vec![
            ("Ruby".to_string(), stats(1, 1, 10)),
            ("C#".to_string(), stats(2, 1, 20)),
            ("Go".to_string(), stats(3, 1, 30)),
        ];

        let rendered = render_table("SuperJob Moscow", &rows);
        let languages: Vec<String> = rendered
            .lines()
            .skip(3)
            .filter(|line| line.starts_with('|'))
            .map(|line| cells(line)[0].clone())
            .collect();

        assert_eq!(languages, vec!["Ruby", "C#", "Go"]);
    }

    #[test]
    fn test_title_too_long_is_dropped() {
        let title = "x".repeat(200);
        let rendered = render_table(&title, &[]);
        let first = rendered.lines().next().unwrap();

        assert!(first.starts_with("+---"));
        assert!(!first.contains('x'));
    }

    #[test]
    fn test_provider_report_render() {
        let report = ProviderReport {
            title: "SuperJob Moscow".to_string(),
            rows: vec![("Java".to_string(), stats(0, 0, 0))],
        };

        let rendered = report.render();
        assert!(rendered.starts_with("+SuperJob Moscow"));
        assert!(rendered.contains("N/A"));
        assert_eq!(report.stats_for("Java"), Some(&stats(0, 0, 0)));
        assert_eq!(report.stats_for("PHP"), None);
    }
}
