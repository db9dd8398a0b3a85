mod lookup;

pub use lookup::ISymbolLookup;
