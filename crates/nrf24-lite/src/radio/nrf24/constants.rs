/// A private module encapsulating register offsets for the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
}

/// A private module encapsulating SPI commands for the nRF24L01.
pub mod commands {
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// A private module to encapsulate bit mnemonics
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;

    /// SETUP_AW value for 5 byte addresses.
    pub const ADDRESS_WIDTH_5: u8 = 3;

    pub const FIFO_TX_FULL: u8 = 0x20;
    pub const FIFO_TX_EMPTY: u8 = 0x10;
    pub const FIFO_RX_FULL: u8 = 0x02;
    pub const FIFO_RX_EMPTY: u8 = 0x01;
}
