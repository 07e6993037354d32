use super::User;

wire_record! {
    /// A portion of the price.
    pub struct LabeledPrice {
        pub label: String,
        /// In the smallest units of the currency (cents for USD).
        pub amount: i64,
    }
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: Some(label.into()),
            amount: Some(amount),
            ..Default::default()
        }
    }
}

wire_record! {
    pub struct Invoice {
        pub title: String,
        pub description: String,
        pub start_parameter: String,
        /// ISO 4217 code.
        pub currency: String,
        pub total_amount: i64,
    }
}

wire_record! {
    pub struct ShippingAddress {
        pub country_code: String,
        pub state: String,
        pub city: String,
        pub street_line1: String,
        pub street_line2: String,
        pub post_code: String,
    }
}

wire_record! {
    pub struct OrderInfo {
        pub name: String,
        pub phone_number: String,
        pub email: String,
        pub shipping_address: ShippingAddress,
    }
}

wire_record! {
    pub struct ShippingOption {
        pub id: String,
        pub title: String,
        pub prices: Vec<LabeledPrice>,
    }
}

impl ShippingOption {
    pub fn new(id: impl Into<String>, title: impl Into<String>, prices: Vec<LabeledPrice>) -> Self {
        Self {
            id: Some(id.into()),
            title: Some(title.into()),
            prices: Some(prices),
            ..Default::default()
        }
    }
}

wire_record! {
    pub struct SuccessfulPayment {
        pub currency: String,
        pub total_amount: i64,
        pub invoice_payload: String,
        pub shipping_option_id: String,
        pub order_info: OrderInfo,
        pub telegram_payment_charge_id: String,
        pub provider_payment_charge_id: String,
    }
}

wire_record! {
    /// Sent only for invoices with flexible price.
    pub struct ShippingQuery {
        pub id: String,
        pub from: User,
        pub invoice_payload: String,
        pub shipping_address: ShippingAddress,
    }
}

wire_record! {
    pub struct PreCheckoutQuery {
        pub id: String,
        pub from: User,
        pub currency: String,
        pub total_amount: i64,
        pub invoice_payload: String,
        pub shipping_option_id: String,
        pub order_info: OrderInfo,
    }
}
