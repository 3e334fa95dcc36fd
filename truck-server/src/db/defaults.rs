//! Sample data for empty collections
//!
//! 集合为空时返回的示例数据。纯函数：每次调用生成新的 id / 时间戳，从不写回数据库。

use shared::models::{FoodTruckInfo, Location, MenuItem, SocialMedia};
use shared::util::{new_id, now_millis};

/// Entities that have a fixed sample set
pub trait SampleData: Sized {
    fn samples() -> Vec<Self>;
}

/// Sample entities for collection `T`
pub fn defaults_for<T: SampleData>() -> Vec<T> {
    T::samples()
}

/// `found` unless it is empty, in which case the sample set
pub fn or_defaults<T: SampleData>(found: Vec<T>) -> Vec<T> {
    if found.is_empty() {
        defaults_for::<T>()
    } else {
        found
    }
}

fn menu_item(name: &str, description: &str, price: f64, category: &str) -> MenuItem {
    MenuItem {
        id: new_id(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image_url: None,
        available: true,
        created_at: now_millis(),
    }
}

impl SampleData for MenuItem {
    fn samples() -> Vec<Self> {
        vec![
            menu_item(
                "Gourmet Burger",
                "Juicy beef patty with fresh lettuce, tomato, and our special sauce",
                12.99,
                "Burgers",
            ),
            menu_item(
                "Fish Tacos",
                "Crispy fish with cabbage slaw and lime crema in soft tortillas",
                9.99,
                "Tacos",
            ),
            menu_item(
                "Loaded Fries",
                "Crispy fries topped with cheese, bacon, and green onions",
                7.99,
                "Sides",
            ),
        ]
    }
}

fn location(name: &str, address: &str, latitude: f64, longitude: f64, schedule: &str) -> Location {
    Location {
        id: new_id(),
        name: name.to_string(),
        address: address.to_string(),
        latitude,
        longitude,
        schedule: Some(schedule.to_string()),
        active: true,
        created_at: now_millis(),
    }
}

impl SampleData for Location {
    fn samples() -> Vec<Self> {
        vec![
            location(
                "Downtown Plaza",
                "123 Main St, Downtown",
                40.7128,
                -74.0060,
                "Mon-Fri: 11:30AM-2:30PM",
            ),
            location(
                "Business District",
                "456 Corporate Blvd",
                40.7580,
                -73.9855,
                "Mon-Fri: 12:00PM-3:00PM",
            ),
        ]
    }
}

/// Business info shown before the owner saves their own
pub fn default_food_truck_info() -> FoodTruckInfo {
    let mut social_media = SocialMedia::new();
    social_media.insert("instagram".to_string(), "@tastywheels".into());
    social_media.insert("facebook".to_string(), "TastyWheelsFoodTruck".into());

    FoodTruckInfo {
        id: new_id(),
        name: "Tasty Wheels Food Truck".to_string(),
        description: "Serving delicious street food with fresh ingredients and bold flavors"
            .to_string(),
        phone: "(555) 123-4567".to_string(),
        email: Some("info@tastywheels.com".to_string()),
        social_media: Some(social_media),
        logo_url: None,
        banner_url: None,
        created_at: now_millis(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_samples() {
        let items = defaults_for::<MenuItem>();
        let categories: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories, vec!["Burgers", "Tacos", "Sides"]);
        assert!(items.iter().all(|i| i.available));
    }

    #[test]
    fn test_location_samples() {
        let locations = defaults_for::<Location>();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].name, "Downtown Plaza");
        assert_eq!(locations[1].longitude, -73.9855);
    }

    #[test]
    fn test_samples_get_fresh_ids() {
        let a = defaults_for::<MenuItem>();
        let b = defaults_for::<MenuItem>();
        assert_ne!(a[0].id, b[0].id);
    }

    #[test]
    fn test_or_defaults_keeps_real_data() {
        let real = vec![menu_item("Only", "one", 1.0, "Misc")];
        let result = or_defaults(real.clone());
        assert_eq!(result, real);

        assert_eq!(or_defaults(Vec::<MenuItem>::new()).len(), 3);
    }

    #[test]
    fn test_default_food_truck_info() {
        let info = default_food_truck_info();
        assert_eq!(info.name, "Tasty Wheels Food Truck");
        assert_eq!(info.social_media.unwrap()["instagram"], "@tastywheels");
    }
}
