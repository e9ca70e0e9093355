use crate::error::Result;
use crate::models::analytics::AnalyticsSnapshot;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::utils::time;
use rust_xlsxwriter::*;

pub const CSV_HEADERS: [&str; 10] = [
    "Name",
    "Email",
    "Phone",
    "Role",
    "Experience (Years)",
    "Status",
    "Applied Date",
    "Last Updated",
    "Has Resume",
    "Notes",
];

pub struct ExportService;

impl ExportService {
    fn quote(value: &str) -> String {
        format!("\"{}\"", value.replace('"', "\"\""))
    }

    fn status_color(status: CandidateStatus) -> Color {
        match status {
            CandidateStatus::Applied => Color::RGB(0x3B82F6),   // Blue
            CandidateStatus::Interview => Color::RGB(0xF59E0B), // Amber
            CandidateStatus::Offer => Color::RGB(0x10B981),     // Emerald
            CandidateStatus::Rejected => Color::RGB(0xEF4444),  // Red
        }
    }
}

impl ExportService {
    /// Plain CSV of the given candidates, one row each, in the order given.
    pub fn candidates_csv(candidates: &[Candidate]) -> String {
        let mut lines = Vec::with_capacity(candidates.len() + 1);
        lines.push(CSV_HEADERS.join(","));

        for candidate in candidates {
            let row = [
                Self::quote(&candidate.name),
                Self::quote(&candidate.email),
                Self::quote(candidate.phone.as_deref().unwrap_or("")),
                Self::quote(&candidate.role),
                candidate.experience.to_string(),
                Self::quote(candidate.status.as_str()),
                Self::quote(&time::to_date_string(candidate.applied_date)),
                Self::quote(&time::to_date_string(candidate.last_updated)),
                if candidate.resume.is_some() { "Yes" } else { "No" }.to_string(),
                Self::quote(&candidate.notes),
            ];
            lines.push(row.join(","));
        }

        lines.join("\n")
    }

    /// Styled workbook: a candidate sheet plus a pipeline summary sheet.
    pub fn candidates_xlsx(candidates: &[Candidate], summary: &AnalyticsSnapshot) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();

        // ── Color palette ──
        let primary_color = Color::RGB(0x1E293B); // Slate 800
        let header_bg = Color::RGB(0x0F172A); // Slate 900
        let alt_row_1 = Color::RGB(0xF8FAFC); // Slate 50
        let alt_row_2 = Color::White;
        let border_color = Color::RGB(0xE2E8F0); // Slate 200

        let title_format = Format::new()
            .set_font_size(16)
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(primary_color)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);
        let subtitle_format = Format::new()
            .set_font_size(10)
            .set_italic()
            .set_font_color(Color::RGB(0x94A3B8))
            .set_background_color(primary_color)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);
        let header_format = Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(Color::White)
            .set_background_color(header_bg)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);

        let exported_at = time::now().format("%Y-%m-%d %H:%M UTC").to_string();

        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name("Candidates")?;

            let columns = [
                ("#", 6.0),
                ("Name", 28.0),
                ("Email", 30.0),
                ("Phone", 18.0),
                ("Role", 26.0),
                ("Experience (Years)", 14.0),
                ("Status", 14.0),
                ("Applied Date", 14.0),
                ("Last Updated", 14.0),
                ("Resume", 30.0),
                ("Notes", 50.0),
            ];
            let last_col = (columns.len() - 1) as u16;

            for (i, (_, width)) in columns.iter().enumerate() {
                worksheet.set_column_width(i as u16, *width)?;
            }

            worksheet.set_row_height(0, 40)?;
            worksheet.merge_range(0, 0, 0, last_col, "Candidate Pipeline", &title_format)?;

            worksheet.set_row_height(1, 22)?;
            let subtitle = format!(
                "Exported: {}  •  Candidates: {}",
                exported_at,
                candidates.len()
            );
            worksheet.merge_range(1, 0, 1, last_col, &subtitle, &subtitle_format)?;

            let header_row = 2;
            worksheet.set_row_height(header_row, 30)?;
            for (i, (name, _)) in columns.iter().enumerate() {
                worksheet.write_string_with_format(header_row, i as u16, *name, &header_format)?;
            }

            let data_start_row = 3;
            for (idx, candidate) in candidates.iter().enumerate() {
                let row = data_start_row + idx as u32;
                let bg = if idx % 2 == 0 { alt_row_1 } else { alt_row_2 };

                let base_fmt = Format::new()
                    .set_font_size(10)
                    .set_background_color(bg)
                    .set_align(FormatAlign::VerticalCenter)
                    .set_border(FormatBorder::Thin)
                    .set_border_color(border_color);
                let center_fmt = base_fmt.clone().set_align(FormatAlign::Center);
                let wrap_fmt = base_fmt.clone().set_text_wrap();
                let name_fmt = base_fmt.clone().set_bold();
                let status_fmt = Format::new()
                    .set_font_size(10)
                    .set_bold()
                    .set_font_color(Color::White)
                    .set_background_color(Self::status_color(candidate.status))
                    .set_align(FormatAlign::Center)
                    .set_align(FormatAlign::VerticalCenter)
                    .set_border(FormatBorder::Thin)
                    .set_border_color(border_color);

                worksheet.set_row_height(row, 22)?;
                worksheet.write_number_with_format(row, 0, (idx + 1) as f64, &center_fmt)?;
                worksheet.write_string_with_format(row, 1, &candidate.name, &name_fmt)?;
                worksheet.write_string_with_format(row, 2, &candidate.email, &base_fmt)?;
                worksheet.write_string_with_format(
                    row,
                    3,
                    candidate.phone.as_deref().unwrap_or("—"),
                    &base_fmt,
                )?;
                worksheet.write_string_with_format(row, 4, &candidate.role, &base_fmt)?;
                worksheet.write_number_with_format(
                    row,
                    5,
                    f64::from(candidate.experience),
                    &center_fmt,
                )?;
                worksheet.write_string_with_format(row, 6, candidate.status.title(), &status_fmt)?;
                worksheet.write_string_with_format(
                    row,
                    7,
                    &time::to_date_string(candidate.applied_date),
                    &center_fmt,
                )?;
                worksheet.write_string_with_format(
                    row,
                    8,
                    &time::to_date_string(candidate.last_updated),
                    &center_fmt,
                )?;
                let resume = candidate
                    .resume
                    .as_ref()
                    .map(|r| if r.file_name.is_empty() { r.url.as_str() } else { r.file_name.as_str() })
                    .unwrap_or("—");
                worksheet.write_string_with_format(row, 9, resume, &base_fmt)?;
                let notes = if candidate.notes.is_empty() { "—" } else { candidate.notes.as_str() };
                worksheet.write_string_with_format(row, 10, notes, &wrap_fmt)?;
            }

            // Header stays visible while scrolling
            worksheet.set_freeze_panes(3, 0)?;
            let last_row = (data_start_row + candidates.len() as u32).saturating_sub(1).max(header_row);
            worksheet.autofilter(header_row, 0, last_row, last_col)?;
        }

        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name("Summary")?;
            worksheet.set_column_width(0, 32.0)?;
            worksheet.set_column_width(1, 16.0)?;

            let label_fmt = Format::new()
                .set_font_size(10)
                .set_bold()
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);
            let value_fmt = Format::new()
                .set_font_size(10)
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);

            worksheet.set_row_height(0, 32)?;
            worksheet.merge_range(0, 0, 0, 1, "Pipeline Summary", &title_format)?;
            worksheet.merge_range(1, 0, 1, 1, &format!("Exported: {}", exported_at), &subtitle_format)?;

            let mut row: u32 = 2;
            worksheet.write_string_with_format(row, 0, "Total applications", &label_fmt)?;
            worksheet.write_number_with_format(row, 1, summary.total_applications as f64, &value_fmt)?;
            row += 1;
            worksheet.write_string_with_format(row, 0, "Average experience (years)", &label_fmt)?;
            worksheet.write_number_with_format(row, 1, summary.average_experience, &value_fmt)?;
            row += 2;

            worksheet.write_string_with_format(row, 0, "Status", &header_format)?;
            worksheet.write_string_with_format(row, 1, "Candidates", &header_format)?;
            row += 1;
            for status in CandidateStatus::ALL {
                let status_fmt = Format::new()
                    .set_font_size(10)
                    .set_bold()
                    .set_font_color(Color::White)
                    .set_background_color(Self::status_color(status))
                    .set_border(FormatBorder::Thin)
                    .set_border_color(border_color);
                worksheet.write_string_with_format(row, 0, status.title(), &status_fmt)?;
                let count = summary.applications_by_status.get(status);
                worksheet.write_number_with_format(row, 1, count as f64, &value_fmt)?;
                row += 1;
            }
            worksheet.write_string_with_format(row, 0, "All stages", &label_fmt)?;
            let stage_total = summary.applications_by_status.total();
            worksheet.write_number_with_format(row, 1, stage_total as f64, &value_fmt)?;
            row += 1;
            row += 1;

            worksheet.write_string_with_format(row, 0, "Role", &header_format)?;
            worksheet.write_string_with_format(row, 1, "Candidates", &header_format)?;
            row += 1;
            for (role, count) in &summary.applications_by_role {
                worksheet.write_string_with_format(row, 0, role, &label_fmt)?;
                worksheet.write_number_with_format(row, 1, *count as f64, &value_fmt)?;
                row += 1;
            }
        }

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::ResumeRef;
    use crate::pipeline::aggregate;
    use crate::pipeline::fixtures::{candidate, sample_pool};

    #[test]
    fn csv_has_header_and_one_line_per_candidate() {
        let pool = sample_pool();
        let csv = ExportService::candidates_csv(&pool);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "Name,Email,Phone,Role,Experience (Years),Status,Applied Date,Last Updated,Has Resume,Notes"
        );
        assert_eq!(
            lines[1],
            "\"Alice Johnson\",\"alice.johnson@example.com\",\"\",\"Frontend Developer\",3,\"applied\",\"2024-01-15\",\"2024-01-15\",No,\"\""
        );
    }

    #[test]
    fn csv_escapes_quotes_and_flags_resumes() {
        let mut c = candidate("Dana \"DJ\" Jones", "QA Engineer", 4, CandidateStatus::Offer, 9);
        c.notes = "Said \"yes\", pending paperwork".into();
        c.resume = Some(ResumeRef {
            url: "/api/files/resume/1".into(),
            file_name: "dana.pdf".into(),
        });
        let csv = ExportService::candidates_csv(&[c]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Dana \"\"DJ\"\" Jones\","));
        assert!(row.contains(",Yes,"));
        assert!(row.ends_with("\"Said \"\"yes\"\", pending paperwork\""));
    }

    #[test]
    fn empty_export_is_only_the_header() {
        assert_eq!(ExportService::candidates_csv(&[]), CSV_HEADERS.join(","));
    }

    #[test]
    fn xlsx_is_a_zip_container() {
        let pool = sample_pool();
        let bytes = ExportService::candidates_xlsx(&pool, &aggregate(&pool)).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let empty = ExportService::candidates_xlsx(&[], &aggregate(&[])).unwrap();
        assert!(empty.starts_with(b"PK"));
    }
}
