//! 桌台二维码目标地址推导
//!
//! The printed QR code for a table resolves to the customer menu page with
//! the table number as a query parameter. Derivation only depends on the
//! deployment's configured base address and menu path, so a given table
//! number always yields the same URL — codes printed earlier stay valid
//! across any amount of data editing.

/// Customer-menu URL for a table: `<base-url>/<menu-page>?table=<number>`
pub fn qr_target(base_url: &str, menu_path: &str, table_number: u32) -> String {
    let base = base_url.trim_end_matches('/');
    let path = menu_path.trim_matches('/');
    format!("{base}/{path}?table={table_number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_table_number_as_query_parameter() {
        assert_eq!(
            qr_target("https://host.example/hotel-look", "menu", 4),
            "https://host.example/hotel-look/menu?table=4"
        );
    }

    #[test]
    fn derivation_is_stable_for_a_deployment() {
        let first = qr_target("https://host.example", "menu", 7);
        let second = qr_target("https://host.example", "menu", 7);
        assert_eq!(first, second);
    }

    #[test]
    fn slashes_are_normalized() {
        assert_eq!(
            qr_target("https://host.example/", "/menu/", 1),
            "https://host.example/menu?table=1"
        );
    }
}
