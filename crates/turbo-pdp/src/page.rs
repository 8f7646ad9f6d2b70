//! Product page view-state façade.
//!
//! [`ProductPage`] owns the loaded catalog, the color selection, the tab and
//! the carousel, and republishes a complete [`ViewSnapshot`] after every
//! operation that changes what the page shows.

use std::time::Instant;

use serde::Serialize;
use tokio::sync::watch;
use turbo_catalog::{CatalogDocument, CatalogSource, ParseError, ProductRecord, Rgba, VariantRecord};
use turbo_observability::{ScreenId, StructuredLogger};

use crate::carousel::{CarouselController, CarouselState, TickOutcome, TickTimer, TimerToken};
use crate::config::EngineConfig;
use crate::description::{format_description, DisplayBlock};
use crate::resolver::{color_option, resolve_variant_position};
use crate::tabs::{
    attribute_rows, select_content, AttributeDisplayRow, ReviewRow, SpecRow, StaticRows,
    TabContent, TabState,
};

/// Prefix of the selected-color caption.
pub const COLOR_LABEL_PREFIX: &str = "اللون";

/// Header fields, taken from the resolved variant when there is one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductHeader {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub stock_status: String,
    pub in_stock: bool,
    /// Always the base product's shipping period.
    pub shipping_period: String,
    pub price: String,
    pub on_sale: bool,
    pub variant_id: Option<i64>,
}

impl ProductHeader {
    fn build(product: &ProductRecord, variant: Option<&VariantRecord>) -> Self {
        let shipping_period = product.shipping.period.clone();
        match variant {
            Some(variant) => {
                let v = &variant.product;
                Self {
                    id: v.id,
                    name: v.name.clone(),
                    sku: v.sku.clone(),
                    stock_status: v.stock_status.as_str().to_string(),
                    in_stock: v.stock_status.is_in_stock(),
                    shipping_period,
                    price: v.price_range.display_price().display(),
                    on_sale: v.price_range.minimum_price.is_on_sale(),
                    variant_id: Some(v.id),
                }
            }
            None => Self {
                id: product.id,
                name: product.name.clone(),
                sku: product.sku.clone(),
                stock_status: product.stock_status.as_str().to_string(),
                in_stock: product.is_in_stock(),
                shipping_period,
                price: product.price_range.display_price().display(),
                on_sale: product.price_range.minimum_price.is_on_sale(),
                variant_id: None,
            },
        }
    }
}

/// One selectable color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub value_index: i64,
    pub label: String,
    pub hex: String,
    pub rgba: Option<Rgba>,
    pub selected: bool,
}

/// Everything a renderer needs to draw the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub has_data: bool,
    pub header: Option<ProductHeader>,
    pub images: Vec<String>,
    pub carousel: CarouselState,
    pub color_options: Vec<ColorSwatch>,
    /// Position of the selected color within `color_options`.
    pub selected_color: Option<usize>,
    pub color_label: Option<String>,
    pub tab: TabState,
    pub tab_content: TabContent,
    pub description: Vec<DisplayBlock>,
    pub spec_rows: Vec<SpecRow>,
    pub reviews: Vec<ReviewRow>,
    pub attributes: Vec<AttributeDisplayRow>,
    pub fomo_message: Option<String>,
}

impl ViewSnapshot {
    /// The image the carousel currently shows.
    pub fn current_image(&self) -> Option<&str> {
        self.images
            .get(self.carousel.current_page)
            .map(String::as_str)
    }
}

/// A user action, as queued by the screen runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SelectColor(i64),
    SelectColorAt(usize),
    SelectTab(usize),
    NextImage,
    PreviousImage,
    SelectPage(usize),
    BeginManualScroll,
    EndManualScroll { offset: f64, page_width: f64 },
}

/// View-state engine for a single product detail screen.
pub struct ProductPage<T: TickTimer> {
    config: EngineConfig,
    logger: StructuredLogger,
    static_rows: StaticRows,
    document: Option<CatalogDocument>,
    description: Vec<DisplayBlock>,
    attributes: Vec<AttributeDisplayRow>,
    selected_color: Option<usize>,
    variant: Option<usize>,
    images: Vec<String>,
    carousel: CarouselController<T>,
    tab: TabState,
    publisher: watch::Sender<ViewSnapshot>,
}

impl<T: TickTimer> ProductPage<T> {
    /// Create an empty page driven by `timer`.
    pub fn new(config: EngineConfig, timer: T) -> Self {
        let (publisher, _) = watch::channel(ViewSnapshot::default());
        Self {
            carousel: CarouselController::new(timer, config.carousel_interval()),
            static_rows: StaticRows::from_source(&config.content),
            logger: StructuredLogger::new(ScreenId::generate()).with_component("page"),
            config,
            document: None,
            description: Vec::new(),
            attributes: Vec::new(),
            selected_color: None,
            variant: None,
            images: Vec::new(),
            tab: TabState::default(),
            publisher,
        }
    }

    /// Use `logger` for this page's events.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Parse `bytes` and show the first product.
    ///
    /// On failure the error is logged and returned, and the page keeps
    /// whatever it showed before.
    pub fn load_catalog(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        let started = Instant::now();
        match turbo_catalog::parse(bytes) {
            Ok(document) => {
                self.load_document(document, started);
                Ok(())
            }
            Err(e) => Err(self.load_failed(e)),
        }
    }

    /// Read and parse a catalog from `source`.
    pub fn load_from(&mut self, source: &dyn CatalogSource) -> Result<(), ParseError> {
        let started = Instant::now();
        match turbo_catalog::load(source) {
            Ok(document) => {
                self.load_document(document, started);
                Ok(())
            }
            Err(e) => Err(self.load_failed(e)),
        }
    }

    fn load_failed(&self, error: ParseError) -> ParseError {
        self.logger
            .error_builder("catalog load failed")
            .field("error", error.to_string())
            .field_bool("not_found", error.is_not_found())
            .emit();
        error
    }

    fn load_document(&mut self, document: CatalogDocument, started: Instant) {
        let product = document.first_product();

        self.description = product
            .map(|p| format_description(&p.description.html))
            .unwrap_or_default();
        self.attributes = product
            .map(|p| attribute_rows(&p.attributes))
            .unwrap_or_default();
        self.selected_color = product
            .and_then(color_option)
            .filter(|option| !option.values.is_empty())
            .map(|_| 0);
        self.variant = None;
        self.images = product.map(ProductRecord::image_urls).unwrap_or_default();

        match product {
            Some(p) => self
                .logger
                .info_builder("catalog loaded")
                .field_i64("product_id", p.id)
                .field("sku", p.sku.as_str())
                .field_i64("products", document.products().len() as i64)
                .field_i64("images", self.images.len() as i64)
                .field_i64("variants", p.variants.len() as i64)
                .field_i64(
                    "colors",
                    color_option(p).map_or(0, |o| o.values.len()) as i64,
                )
                .field_i64("description_rows", self.description.len() as i64)
                .duration_ms("parse_ms", started.elapsed())
                .emit(),
            None => self.logger.warn("catalog loaded without products"),
        }

        self.document = Some(document);
        self.reset_carousel();
        self.publish();
    }

    /// Select a color by its option value index.
    ///
    /// Indices the color option does not offer are ignored. A resolved
    /// variant with its own gallery replaces the images; otherwise the base
    /// gallery is shown. A variant gallery always restarts the carousel; the
    /// base gallery only does so when the images change.
    pub fn select_color(&mut self, value_index: i64) -> Option<&VariantRecord> {
        let product = self.product()?;
        let Some(position) = color_option(product)
            .and_then(|option| option.values.iter().position(|v| v.index == value_index))
        else {
            self.logger
                .debug_builder("unknown color ignored")
                .field_i64("value_index", value_index)
                .emit();
            return None;
        };

        let variant = resolve_variant_position(product, value_index);
        let (images, variant_gallery) = match variant.map(|i| &product.variants[i].product) {
            Some(v) if !v.media_gallery.is_empty() => (v.image_urls(), true),
            _ => (product.image_urls(), false),
        };

        let gallery_changed = images != self.images;
        self.logger
            .info_builder("color selected")
            .field_i64("value_index", value_index)
            .field_bool("variant_found", variant.is_some())
            .field_bool("gallery_changed", gallery_changed)
            .emit();

        self.selected_color = Some(position);
        self.variant = variant;
        if variant_gallery || gallery_changed {
            self.images = images;
            self.reset_carousel();
        }
        self.publish();
        self.selected_variant()
    }

    /// Select a color by its position in the swatch list.
    pub fn select_color_at(&mut self, position: usize) -> Option<&VariantRecord> {
        let Some(value_index) = self
            .product()
            .and_then(color_option)
            .and_then(|option| option.values.get(position))
            .map(|v| v.index)
        else {
            self.logger
                .debug_builder("color position out of range")
                .field_i64("position", position as i64)
                .emit();
            return None;
        };
        self.select_color(value_index)
    }

    /// Select a tab. Returns the new tab state.
    pub fn select_tab(&mut self, index: usize) -> TabState {
        self.tab = TabState::select(index);
        self.logger
            .debug_builder("tab selected")
            .field_i64("index", index as i64)
            .emit();
        self.publish();
        self.tab
    }

    pub fn next_image(&mut self) {
        self.carousel.next();
        self.publish();
    }

    pub fn previous_image(&mut self) {
        self.carousel.previous();
        self.publish();
    }

    pub fn select_page(&mut self, index: usize) {
        self.carousel.select_page(index);
        self.publish();
    }

    pub fn begin_manual_scroll(&mut self) {
        self.carousel.begin_manual_scroll();
        self.publish();
    }

    pub fn end_manual_scroll(&mut self, offset: f64, page_width: f64) {
        self.carousel.end_manual_scroll(offset, page_width);
        self.publish();
    }

    /// Deliver a carousel timer tick. Stale ticks change nothing.
    pub fn handle_tick(&mut self, token: TimerToken) -> TickOutcome {
        let outcome = self.carousel.tick(token);
        match outcome {
            TickOutcome::Advanced { page } => {
                self.logger
                    .child("carousel")
                    .trace(&format!("advanced to page {page}"));
                self.publish();
            }
            TickOutcome::Dropped => self
                .logger
                .child("carousel")
                .debug_builder("stale tick dropped")
                .field_i64("token", token.value() as i64)
                .emit(),
        }
        outcome
    }

    /// Apply a queued user action.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SelectColor(value_index) => {
                self.select_color(value_index);
            }
            Intent::SelectColorAt(position) => {
                self.select_color_at(position);
            }
            Intent::SelectTab(index) => {
                self.select_tab(index);
            }
            Intent::NextImage => self.next_image(),
            Intent::PreviousImage => self.previous_image(),
            Intent::SelectPage(index) => self.select_page(index),
            Intent::BeginManualScroll => self.begin_manual_scroll(),
            Intent::EndManualScroll { offset, page_width } => {
                self.end_manual_scroll(offset, page_width)
            }
        }
    }

    /// Stop the carousel for good.
    pub fn dispose(&mut self) {
        if self.carousel.is_disposed() {
            return;
        }
        self.carousel.dispose();
        self.logger.info("screen disposed");
        self.publish();
    }

    /// Receive a fresh snapshot after every change.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.publisher.subscribe()
    }

    /// Derive the current view state.
    pub fn snapshot(&self) -> ViewSnapshot {
        let Some(product) = self.product() else {
            return ViewSnapshot {
                carousel: self.carousel.state(),
                tab: self.tab,
                ..ViewSnapshot::default()
            };
        };

        let color = color_option(product);
        let color_options = color
            .map(|option| {
                option
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| {
                        let rgba = value.swatch.rgba();
                        ColorSwatch {
                            value_index: value.index,
                            label: value.label.clone(),
                            hex: rgba.map(|c| c.to_hex()).unwrap_or_default(),
                            rgba,
                            selected: self.selected_color == Some(i),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();
        let color_label = color
            .zip(self.selected_color)
            .and_then(|(option, i)| option.values.get(i))
            .map(|value| format!("{COLOR_LABEL_PREFIX} {}", value.label));

        let tab_content = select_content(
            self.config.tabs,
            &self.tab,
            &self.description,
            &self.static_rows.specs,
            &self.static_rows.reviews,
            &self.attributes,
        );

        ViewSnapshot {
            has_data: true,
            header: Some(ProductHeader::build(product, self.selected_variant())),
            images: self.images.clone(),
            carousel: self.carousel.state(),
            color_options,
            selected_color: self.selected_color,
            color_label,
            tab: self.tab,
            tab_content,
            description: self.description.clone(),
            spec_rows: self.static_rows.specs.clone(),
            reviews: self.static_rows.reviews.clone(),
            attributes: self.attributes.clone(),
            fomo_message: product
                .product_features
                .as_ref()
                .and_then(|f| f.fomo_message())
                .map(str::to_string),
        }
    }

    /// The product the page shows.
    pub fn product(&self) -> Option<&ProductRecord> {
        self.document.as_ref()?.first_product()
    }

    /// The variant resolved by the last color selection.
    pub fn selected_variant(&self) -> Option<&VariantRecord> {
        let product = self.product()?;
        product.variants.get(self.variant?)
    }

    pub fn document(&self) -> Option<&CatalogDocument> {
        self.document.as_ref()
    }

    pub fn carousel(&self) -> &CarouselController<T> {
        &self.carousel
    }

    pub fn tab(&self) -> TabState {
        self.tab
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn screen_id(&self) -> &ScreenId {
        self.logger.screen_id()
    }

    fn reset_carousel(&mut self) {
        self.carousel.load_pages(self.images.len());
        self.logger
            .child("carousel")
            .debug_builder("carousel reset")
            .field_i64("pages", self.images.len() as i64)
            .field_bool("timer_active", self.carousel.state().timer_active)
            .emit();
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselPhase, ManualTimer};
    use crate::description::Tint;
    use crate::tabs::TabSet;
    use turbo_observability::{LogCapture, LogLevel};

    const FIXTURE: &[u8] = include_bytes!("../../turbo-catalog/tests/fixtures/catalog.json");

    fn loaded() -> ProductPage<ManualTimer> {
        let mut page = ProductPage::new(EngineConfig::default(), ManualTimer::new());
        page.load_catalog(FIXTURE).unwrap();
        page
    }

    fn tick(page: &mut ProductPage<ManualTimer>) -> TickOutcome {
        let token = page.carousel().timer().fire().expect("timer armed");
        page.handle_tick(token)
    }

    fn base_images() -> Vec<String> {
        (1..=3)
            .map(|i| format!("https://cdn.example.test/wallet/{i}.jpg"))
            .collect()
    }

    #[test]
    fn test_initial_snapshot_is_empty() {
        let page = ProductPage::new(EngineConfig::default(), ManualTimer::new());
        let snapshot = page.snapshot();
        assert!(!snapshot.has_data);
        assert!(snapshot.header.is_none());
        assert_eq!(snapshot.carousel.phase, CarouselPhase::Idle);
    }

    #[test]
    fn test_load_populates_view() {
        let snapshot = loaded().snapshot();

        assert!(snapshot.has_data);
        assert_eq!(snapshot.images, base_images());
        assert_eq!(snapshot.carousel.current_page, 0);
        assert_eq!(snapshot.carousel.page_count, 3);
        assert!(snapshot.carousel.timer_active);

        let header = snapshot.header.unwrap();
        assert_eq!(header.sku, "AW-5120");
        assert_eq!(header.price, "99.00 SAR");
        assert!(header.in_stock);
        assert!(header.on_sale);
        assert_eq!(header.shipping_period, "2 - 4 days");

        assert_eq!(snapshot.color_options.len(), 3);
        assert_eq!(snapshot.selected_color, Some(0));
        assert_eq!(snapshot.color_label.as_deref(), Some("اللون Black"));
        assert_eq!(snapshot.fomo_message.as_deref(), Some("Only a few left"));
    }

    #[test]
    fn test_description_rows_from_fixture() {
        let snapshot = loaded().snapshot();
        let texts: Vec<&str> = snapshot.description.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Slim aluminium wallet with a pop-up card mechanism.",
                "Features",
                "Holds up to 8 cards",
                "RFID blocking",
                "Materials",
                "Genuine leather, aluminium",
            ]
        );
        let stripes: Vec<bool> = snapshot.description.iter().map(|b| b.striped).collect();
        assert_eq!(stripes, vec![true, false, false, false, true, true]);
        assert_eq!(snapshot.description[1].tint, Tint::Plain);
        assert_eq!(snapshot.tab_content, TabContent::Description(snapshot.description.clone()));
    }

    #[test]
    fn test_variant_with_gallery_replaces_images() {
        let mut page = loaded();
        page.next_image();

        let variant = page.select_color(101).unwrap();
        assert_eq!(variant.product.sku, "AW-5120-BLK");

        let snapshot = page.snapshot();
        assert_eq!(snapshot.images.len(), 2);
        assert!(snapshot.images[0].ends_with("black-1.jpg"));
        assert_eq!(snapshot.carousel.current_page, 0);
        assert_eq!(snapshot.header.unwrap().variant_id, Some(5121));
    }

    #[test]
    fn test_variant_without_gallery_keeps_base_images() {
        let mut page = loaded();
        page.select_color(102).unwrap();

        let snapshot = page.snapshot();
        assert_eq!(snapshot.images, base_images());
        assert_eq!(snapshot.selected_color, Some(1));
        assert_eq!(snapshot.color_label.as_deref(), Some("اللون Brown"));

        let header = snapshot.header.unwrap();
        assert_eq!(header.sku, "AW-5120-BRN");
        assert_eq!(header.stock_status, "OUT_OF_STOCK");
        assert!(!header.in_stock);
        assert_eq!(header.price, "119.00 SAR");
        assert_eq!(header.shipping_period, "2 - 4 days");
    }

    #[test]
    fn test_color_without_variant_reverts_to_base() {
        let mut page = loaded();
        page.select_color(101);
        assert!(page.select_color(103).is_none());

        let snapshot = page.snapshot();
        assert_eq!(snapshot.images, base_images());
        assert_eq!(snapshot.header.unwrap().sku, "AW-5120");
        assert_eq!(snapshot.selected_color, Some(2));
    }

    #[test]
    fn test_unknown_color_is_ignored() {
        let mut page = loaded();
        let before = page.snapshot();
        assert!(page.select_color(999).is_none());
        assert!(page.select_color_at(9).is_none());
        assert_eq!(page.snapshot(), before);
    }

    #[test]
    fn test_same_gallery_does_not_reset_carousel() {
        let mut page = loaded();
        page.select_color(102);
        tick(&mut page);
        assert_eq!(page.carousel().current_page(), 1);

        page.select_color(102);
        page.select_color(103);
        assert_eq!(page.carousel().current_page(), 1);
        assert_eq!(page.carousel().timer().arm_count(), 1);
    }

    #[test]
    fn test_reselecting_variant_gallery_restarts_carousel() {
        let mut page = loaded();
        page.select_color(101);
        tick(&mut page);
        assert_eq!(page.carousel().current_page(), 1);
        let arms = page.carousel().timer().arm_count();

        page.select_color(101);
        assert_eq!(page.carousel().current_page(), 0);
        assert_eq!(page.carousel().timer().arm_count(), arms + 1);
        assert_eq!(page.carousel().timer().live_count(), 1);
    }

    #[test]
    fn test_select_color_at_position() {
        let mut page = loaded();
        let variant = page.select_color_at(0).unwrap();
        assert_eq!(variant.product.id, 5121);
    }

    #[test]
    fn test_tab_selection() {
        let mut page = loaded();

        let state = page.select_tab(2);
        assert!(state.reviews_panel_visible());
        assert!(matches!(page.snapshot().tab_content, TabContent::Reviews(r) if r.len() == 3));

        page.select_tab(1);
        let snapshot = page.snapshot();
        assert!(!snapshot.tab.reviews_panel_visible());
        assert_eq!(snapshot.tab_content.len(), 5);

        page.select_tab(3);
        assert_eq!(page.snapshot().tab_content, TabContent::Empty);
    }

    #[test]
    fn test_extended_tabs_show_attributes() {
        let config = EngineConfig::default().with_tabs(TabSet::Extended);
        let mut page = ProductPage::new(config, ManualTimer::new());
        page.load_catalog(FIXTURE).unwrap();
        page.select_tab(3);

        match page.snapshot().tab_content {
            TabContent::Attributes(rows) => {
                assert_eq!(rows.len(), 3);
                assert_eq!(rows[0].value, "Leather");
                assert_eq!(rows[1].tint, Tint::Plain);
            }
            other => panic!("expected attributes, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let mut page = loaded();
        page.select_color(101);
        page.select_tab(1);
        let before = page.snapshot();

        let err = page.load_catalog(b"{\"data\":").unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(page.snapshot(), before);
    }

    #[test]
    fn test_missing_source_reports_not_found() {
        let mut page = ProductPage::new(EngineConfig::default(), ManualTimer::new());
        let err = page
            .load_from(&turbo_catalog::BytesSource::missing("response.json"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(!page.snapshot().has_data);
    }

    #[test]
    fn test_empty_document_has_no_data() {
        let mut page = ProductPage::new(EngineConfig::default(), ManualTimer::new());
        page.load_catalog(br#"{"data":{"products":{"items":[]}}}"#).unwrap();

        let snapshot = page.snapshot();
        assert!(!snapshot.has_data);
        assert_eq!(snapshot.carousel.phase, CarouselPhase::Idle);
        assert!(page.carousel().timer().fire().is_none());
    }

    #[test]
    fn test_reload_resets_selection() {
        let mut page = loaded();
        page.select_color(101);
        page.load_catalog(FIXTURE).unwrap();

        let snapshot = page.snapshot();
        assert_eq!(snapshot.images, base_images());
        assert_eq!(snapshot.selected_color, Some(0));
        assert_eq!(snapshot.header.unwrap().variant_id, None);
        assert_eq!(page.carousel().timer().max_live(), 1);
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let mut page = ProductPage::new(EngineConfig::default(), ManualTimer::new());
        let mut rx = page.subscribe();
        assert!(!rx.borrow_and_update().has_data);

        page.load_catalog(FIXTURE).unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().has_data);

        tick(&mut page);
        assert_eq!(rx.borrow_and_update().carousel.current_page, 1);

        page.select_tab(2);
        assert!(rx.borrow_and_update().tab.reviews_panel_visible());
    }

    #[test]
    fn test_stale_tick_does_not_publish() {
        let mut page = loaded();
        let stale = page.carousel().armed_token().unwrap();
        page.next_image();

        let mut rx = page.subscribe();
        rx.borrow_and_update();
        assert_eq!(page.handle_tick(stale), TickOutcome::Dropped);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_dispose_stops_carousel() {
        let mut page = loaded();
        let token = page.carousel().armed_token().unwrap();
        page.dispose();
        page.dispose();

        assert_eq!(page.handle_tick(token), TickOutcome::Dropped);
        page.apply(Intent::NextImage);
        let snapshot = page.snapshot();
        assert_eq!(snapshot.carousel.phase, CarouselPhase::Disposed);
        assert_eq!(snapshot.carousel.current_page, 0);
        assert!(!snapshot.carousel.timer_active);
    }

    #[test]
    fn test_apply_routes_intents() {
        let mut page = loaded();
        page.apply(Intent::SelectColorAt(1));
        page.apply(Intent::SelectTab(2));
        page.apply(Intent::SelectPage(2));
        page.apply(Intent::BeginManualScroll);
        page.apply(Intent::EndManualScroll {
            offset: 320.0,
            page_width: 320.0,
        });

        let snapshot = page.snapshot();
        assert_eq!(snapshot.selected_color, Some(1));
        assert!(snapshot.tab.reviews_panel_visible());
        assert_eq!(snapshot.carousel.current_page, 1);
        assert_eq!(snapshot.current_image(), Some(base_images()[1].as_str()));
    }

    #[test]
    fn test_load_events_are_logged() {
        let capture = LogCapture::default();
        let logger = StructuredLogger::new(ScreenId::from_string("pdp-test"))
            .with_min_level(LogLevel::Debug)
            .with_capture(capture.clone());
        let mut page =
            ProductPage::new(EngineConfig::default(), ManualTimer::new()).with_logger(logger);

        page.load_catalog(FIXTURE).unwrap();
        let _ = page.load_catalog(b"not json");

        let entries = capture.lock().unwrap();
        let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.contains(&"catalog loaded"));
        assert!(messages.contains(&"carousel reset"));
        assert!(messages.contains(&"catalog load failed"));
        assert!(entries.iter().all(|e| e.screen_id == "pdp-test"));
    }
}
