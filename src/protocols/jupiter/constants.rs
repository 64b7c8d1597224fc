/// Fixed byte length of the swap event record.
pub const SWAP_EVENT_LEN: usize = 128;

pub mod discriminators {
    pub mod instructions {
        pub const ROUTE: [u8; 8] = [229, 23, 203, 151, 122, 227, 173, 42];
        pub const ROUTE_WITH_TOKEN_LEDGER: [u8; 8] = [150, 86, 71, 116, 167, 93, 14, 104];
        pub const SHARED_ACCOUNTS_ROUTE: [u8; 8] = [193, 32, 155, 51, 65, 214, 156, 129];
        pub const SHARED_ACCOUNTS_ROUTE_WITH_TOKEN_LEDGER: [u8; 8] =
            [230, 121, 143, 80, 119, 159, 106, 170];
        pub const EXACT_OUT_ROUTE: [u8; 8] = [208, 51, 239, 151, 123, 43, 237, 92];
        pub const SHARED_ACCOUNTS_EXACT_OUT_ROUTE: [u8; 8] = [176, 209, 105, 168, 154, 125, 69, 62];
    }

    pub mod events {
        pub const SWAP: [u8; 8] = [228, 69, 165, 46, 81, 203, 154, 29];
    }
}
