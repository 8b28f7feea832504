//! Column and search-field sets for the three entity tables.

use crate::models::{Customer, Order, Product};

use super::{Column, TableRow};

const CUSTOMER_COLUMNS: &[Column<Customer>] = &[
    Column {
        header: "ID",
        extract: |c| c.id.to_string(),
    },
    Column {
        header: "Name",
        extract: |c| c.name.clone(),
    },
    Column {
        header: "Email",
        extract: |c| c.email.to_string(),
    },
    Column {
        header: "Phone",
        extract: |c| c.phone.to_string(),
    },
    Column {
        header: "Address",
        extract: |c| c.address.clone(),
    },
];

impl TableRow for Customer {
    fn columns() -> &'static [Column<Self>] {
        CUSTOMER_COLUMNS
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.email.as_str(), self.phone.as_str()]
    }
}

const PRODUCT_COLUMNS: &[Column<Product>] = &[
    Column {
        header: "ID",
        extract: |p| p.id.to_string(),
    },
    Column {
        header: "Name",
        extract: |p| p.name.clone(),
    },
    Column {
        header: "Category",
        extract: |p| p.category.clone(),
    },
    Column {
        header: "Price",
        extract: |p| format!("${}", p.price),
    },
    Column {
        header: "Stock",
        extract: |p| p.stock.to_string(),
    },
];

impl TableRow for Product {
    fn columns() -> &'static [Column<Self>] {
        PRODUCT_COLUMNS
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description, &self.category]
    }
}

const ORDER_COLUMNS: &[Column<Order>] = &[
    Column {
        header: "Order ID",
        extract: |o| o.id.to_string(),
    },
    Column {
        header: "Customer",
        extract: |o| o.customer_name.clone(),
    },
    Column {
        header: "Date",
        extract: |o| o.created_at.format("%Y-%m-%d").to_string(),
    },
    Column {
        header: "Status",
        extract: |o| o.status.to_string(),
    },
    Column {
        header: "Total",
        extract: |o| format!("${}", o.total),
    },
];

impl TableRow for Order {
    fn columns() -> &'static [Column<Self>] {
        ORDER_COLUMNS
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), &self.customer_name]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::seed;
    use crate::views::{filter, headers, render_row};

    use super::*;

    #[test]
    fn test_customer_search_covers_name_email_phone() {
        let customers = seed::customers();

        let by_name = filter(&customers, "jane");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Jane Smith");

        let by_email = filter(&customers, "ROBERT.J@");
        assert_eq!(by_email.len(), 1);

        let by_phone = filter(&customers, "555-789");
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].name, "Emily Davis");
    }

    #[test]
    fn test_product_search_covers_description_and_category() {
        let products = seed::products();

        let by_description = filter(&products, "noise-cancelling");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Headphones");

        let by_category = filter(&products, "wearables");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].name, "Smart Watch");
    }

    #[test]
    fn test_order_search_covers_id_and_customer_name() {
        let orders = seed::orders();

        let by_id = filter(&orders, "ord-003");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].customer_name, "Robert Johnson");

        let by_customer = filter(&orders, "emily");
        assert_eq!(by_customer.len(), 1);
    }

    #[test]
    fn test_empty_term_matches_everything_in_order() {
        let products = seed::products();
        let all = filter(&products, "   ");
        assert_eq!(all.len(), products.len());

        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Laptop", "Smartphone", "Headphones", "Tablet", "Smart Watch"]
        );
    }

    #[test]
    fn test_customer_table_shape() {
        assert_eq!(
            headers::<Customer>(),
            ["ID", "Name", "Email", "Phone", "Address"]
        );

        let customers = seed::customers();
        let row = render_row(&customers[0]);
        assert_eq!(
            row,
            [
                "CUST-001",
                "John Doe",
                "john.doe@example.com",
                "555-123-4567",
                "123 Main St, New York, NY 10001"
            ]
        );
    }

    #[test]
    fn test_order_table_shape() {
        assert_eq!(
            headers::<Order>(),
            ["Order ID", "Customer", "Date", "Status", "Total"]
        );

        let orders = seed::orders();
        let row = render_row(&orders[0]);
        assert_eq!(
            row,
            ["ORD-001", "John Doe", "2023-06-01", "pending", "$1100.00"]
        );
    }
}
