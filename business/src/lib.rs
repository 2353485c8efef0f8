pub mod application {
    pub mod cart {
        pub mod add_line;
        pub mod change_format;
        pub mod clear;
        pub mod get;
        pub mod reconcile;
        pub mod remove_line;
        pub mod resync;
        pub mod update_quantity;
    }
    pub mod checkout {
        pub mod confirm_payment;
        pub mod create_order;
        pub mod report_payment_failure;
    }
    pub mod session {
        pub mod login;
        pub mod logout;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod storage;
    pub mod shared {
        pub mod money;
        pub mod product;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod backend;
        pub mod errors;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod add_line;
            pub mod change_format;
            pub mod clear;
            pub mod get;
            pub mod reconcile;
            pub mod remove_line;
            pub mod update_quantity;
        }
    }
    pub mod checkout {
        pub mod backend;
        pub mod errors;
        pub mod model;
        pub mod pending;
        pub mod use_cases {
            pub mod confirm_payment;
            pub mod create_order;
            pub mod report_payment_failure;
        }
    }
    pub mod machinery {
        pub mod errors;
        pub mod model;
        pub mod order_message;
        pub mod store;
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod login;
            pub mod logout;
        }
    }
    pub mod wishlist {
        pub mod model;
        pub mod store;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
