mod tables;

pub use self::tables::frequencies as print_frequency_table;
