mod money;

pub use money::StringMoney;
