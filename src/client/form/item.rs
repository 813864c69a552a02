use crate::model::item::{ItemDto, ItemPayload};

use super::{optional, require, ErrorMap};

/// Controlled field set behind the item add/edit modal.
///
/// `price_per_day` stays a raw string while being edited; it is only
/// coerced to a number once validation has accepted it.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub sub_category: String,
    pub brand: String,
    pub model: String,
    pub price_per_day: String,
    pub condition: String,
    pub images: Vec<String>,
    pub available: bool,
    pub location: String,
}

impl ItemForm {
    pub fn create() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: "Electronics".to_string(),
            sub_category: String::new(),
            brand: String::new(),
            model: String::new(),
            price_per_day: String::new(),
            condition: "Good".to_string(),
            images: Vec::new(),
            available: true,
            location: String::new(),
        }
    }

    pub fn edit(item: &ItemDto) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            sub_category: item.sub_category.clone().unwrap_or_default(),
            brand: item.brand.clone().unwrap_or_default(),
            model: item.model.clone().unwrap_or_default(),
            price_per_day: format_price(item.price_per_day),
            condition: item.condition.clone(),
            images: item.images.clone(),
            available: item.available,
            location: item.location.clone().unwrap_or_default(),
        }
    }

    pub fn add_image(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.images.push(url.to_string());
        }
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();

        require(&mut errors, "title", &self.title, "Title is required");
        require(&mut errors, "category", &self.category, "Category is required");

        match self.price_per_day.trim().parse::<f64>() {
            Ok(price) if price > 0.0 => {}
            _ => {
                errors.insert(
                    "price_per_day",
                    "Price per day must be greater than 0".to_string(),
                );
            }
        }

        errors
    }

    /// Runs validation; hands the coerced payload to `on_valid` only when
    /// the field set is clean. Returns the error map either way.
    pub fn submit(&self, on_valid: impl FnOnce(ItemPayload)) -> ErrorMap {
        let errors = self.validate();
        if errors.is_empty() {
            on_valid(self.to_payload());
        }
        errors
    }

    fn to_payload(&self) -> ItemPayload {
        ItemPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
            sub_category: optional(&self.sub_category),
            brand: optional(&self.brand),
            model: optional(&self.model),
            price_per_day: self.price_per_day.trim().parse().unwrap_or_default(),
            condition: self.condition.clone(),
            images: self.images.clone(),
            available: self.available,
            location: optional(&self.location),
        }
    }
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ItemForm {
        ItemForm {
            title: "Projector".to_string(),
            price_per_day: "15".to_string(),
            ..ItemForm::create()
        }
    }

    /// Tests that a clean form submits a payload with the price coerced
    /// to a number.
    #[test]
    fn valid_form_coerces_price() {
        let mut saved = None;

        let errors = filled_form().submit(|payload| saved = Some(payload));

        assert!(errors.is_empty());
        let payload = saved.expect("payload must be produced");
        assert_eq!(payload.price_per_day, 15.0);
        assert!(payload.available);
    }

    /// Tests the required-field property for the title.
    #[test]
    fn empty_title_never_saves() {
        let mut form = filled_form();
        form.title = String::new();
        let mut saved = false;

        let errors = form.submit(|_| saved = true);

        assert!(!saved);
        assert!(errors.contains_key("title"));
    }

    /// Tests the price invariant.
    ///
    /// Verifies that zero, negative, and non-numeric prices are rejected
    /// while any positive price is accepted.
    #[test]
    fn price_must_be_strictly_positive() {
        let mut form = filled_form();

        for bad in ["0", "-5", "", "abc"] {
            form.price_per_day = bad.to_string();
            assert!(
                form.validate().contains_key("price_per_day"),
                "price {bad:?} must be rejected"
            );
        }

        for good in ["0.5", "15", "120.75"] {
            form.price_per_day = good.to_string();
            assert!(
                !form.validate().contains_key("price_per_day"),
                "price {good:?} must be accepted"
            );
        }
    }

    /// Tests the image list helpers.
    ///
    /// Expected: blank URLs are ignored, order is preserved, removal is
    /// by index.
    #[test]
    fn image_list_is_ordered_and_skips_blanks() {
        let mut form = filled_form();

        form.add_image("/a.png");
        form.add_image("   ");
        form.add_image("/b.png");
        assert_eq!(form.images, vec!["/a.png", "/b.png"]);

        form.remove_image(0);
        assert_eq!(form.images, vec!["/b.png"]);

        // Out-of-range removal is ignored.
        form.remove_image(5);
        assert_eq!(form.images.len(), 1);
    }

    /// Tests that editing seeds the form from the existing item.
    #[test]
    fn edit_seeds_fields_from_the_item() {
        let item = ItemDto {
            id: "1".to_string(),
            title: "MacBook Pro 16\"".to_string(),
            description: "Laptop".to_string(),
            category: "Electronics".to_string(),
            sub_category: Some("Laptops".to_string()),
            brand: None,
            model: None,
            price_per_day: 50.0,
            condition: "Excellent".to_string(),
            images: vec!["/a.png".to_string()],
            available: false,
            location: None,
            owner_id: "1".to_string(),
        };

        let form = ItemForm::edit(&item);

        assert_eq!(form.title, "MacBook Pro 16\"");
        assert_eq!(form.price_per_day, "50");
        assert!(!form.available);
        assert!(form.validate().is_empty());
    }
}
