//! Footer stamper
//!
//! Second pass over the finished document. The total page count is only known
//! once every section has been laid out, so footers are drawn last.

use chrono::NaiveDateTime;

use crate::config::{FOOTER_RULE_FROM_BOTTOM_MM, FOOTER_TEXT_FROM_BOTTOM_MM};
use crate::models::BrandingInfo;
use crate::report::canvas::Canvas;
use crate::report::style::{COLOR_GRAY, COLOR_LIGHT_GRAY, SIZE_FOOTER};
use crate::report::text::{fit_to_width, text_width_mm, FontStyle};

/// Space between the caption and the page label (mm)
const LABEL_GAP_MM: f32 = 4.0;

pub fn page_label(page: usize, total: usize) -> String {
    format!("Page {} of {}", page, total)
}

pub fn footer_caption(branding: &BrandingInfo, generated_at: NaiveDateTime) -> String {
    format!(
        "{}   |   Generated {}",
        branding.display_name(),
        generated_at.format("%Y-%m-%d %H:%M")
    )
}

/// Shorten the caption so it ends before the right-aligned page label
pub fn fit_caption(caption: &str, label: &str, line_width: f32) -> String {
    let label_width = text_width_mm(label, FontStyle::Regular, SIZE_FOOTER);
    let available = (line_width - label_width - LABEL_GAP_MM).max(0.0);
    fit_to_width(caption, FontStyle::Regular, SIZE_FOOTER, available)
}

/// Stamp every page with its number, the total, the business name and the
/// generation time. Returns the number of pages stamped.
pub fn stamp_footers(canvas: &Canvas, branding: &BrandingInfo, generated_at: NaiveDateTime) -> usize {
    let layers = canvas.page_layers();
    let total = layers.len();
    let caption = footer_caption(branding, generated_at);

    let page_height = canvas.config().page_height_mm;
    let rule = page_height - FOOTER_RULE_FROM_BOTTOM_MM;
    let baseline = page_height - FOOTER_TEXT_FROM_BOTTOM_MM;
    let (left, right) = (canvas.left(), canvas.right());

    for (i, layer) in layers.iter().enumerate() {
        let label = page_label(i + 1, total);
        let label_width = text_width_mm(&label, FontStyle::Regular, SIZE_FOOTER);
        let caption = fit_caption(&caption, &label, right - left);

        canvas.hline_on(layer, left, right, rule, COLOR_LIGHT_GRAY);
        canvas.text_on(layer, left, baseline, &caption, FontStyle::Regular, SIZE_FOOTER, COLOR_GRAY);
        canvas.text_on(layer, right - label_width, baseline, &label, FontStyle::Regular, SIZE_FOOTER, COLOR_GRAY);
    }

    tracing::debug!("Stamped footers on {} pages", total);
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use chrono::NaiveDate;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_labels() {
        assert_eq!(page_label(2, 3), "Page 2 of 3");
        let caption = footer_caption(&BrandingInfo::new("Iron Gym"), generated_at());
        assert_eq!(caption, "Iron Gym   |   Generated 2025-03-14 09:05");

        let fallback = footer_caption(&BrandingInfo::default(), generated_at());
        assert!(fallback.starts_with("Personal Training"));
    }

    #[test]
    fn test_stamps_every_page() {
        let mut canvas = Canvas::new("Test", &ReportConfig::default()).unwrap();
        canvas.place_block(200.0);
        canvas.place_block(200.0);
        canvas.place_block(200.0);
        assert_eq!(canvas.page_count(), 3);

        let stamped = stamp_footers(&canvas, &BrandingInfo::new("Iron Gym"), generated_at());
        assert_eq!(stamped, 3);
        assert!(canvas.finish().unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_footer_sits_in_reserved_margin() {
        let config = ReportConfig::default();
        let usable_bottom = config.page_height_mm - config.footer_reserve_mm;
        assert!(config.page_height_mm - FOOTER_RULE_FROM_BOTTOM_MM > usable_bottom);
        assert!(FOOTER_TEXT_FROM_BOTTOM_MM < FOOTER_RULE_FROM_BOTTOM_MM);
    }

    #[test]
    fn test_long_caption_stops_before_label() {
        let branding = BrandingInfo::new(
            "Academia de Musculacao e Condicionamento Fisico Integrado do Centro Historico de Sao Paulo, Unidade Avenida Paulista",
        );
        let caption = footer_caption(&branding, generated_at());
        let label = page_label(12, 12);
        let line_width = ReportConfig::default().content_width_mm();

        let fitted = fit_caption(&caption, &label, line_width);
        let label_width = text_width_mm(&label, FontStyle::Regular, SIZE_FOOTER);
        assert!(fitted.len() < caption.len());
        assert!(text_width_mm(&fitted, FontStyle::Regular, SIZE_FOOTER) <= line_width - label_width - LABEL_GAP_MM);

        let short = footer_caption(&BrandingInfo::new("Iron Gym"), generated_at());
        assert_eq!(fit_caption(&short, &label, line_width), short);
    }
}
