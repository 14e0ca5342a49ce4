use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::common::types::{AccessType, Address, PageNumber};
use crate::simulation::error::Result;

/// One logical memory reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub address: Address,
    pub access: AccessType,
}

impl Reference {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            access: AccessType::from_address(address),
        }
    }

    /// Logical page holding this address. The offset is not needed.
    pub fn page_number(&self, page_size: u64) -> PageNumber {
        (self.address / page_size) as PageNumber
    }
}

/// A reference trace: whitespace separated decimal addresses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    references: Vec<Reference>,
    skipped: usize,
}

impl Trace {
    pub fn from_addresses(addresses: impl IntoIterator<Item = Address>) -> Self {
        Self {
            references: addresses.into_iter().map(Reference::new).collect(),
            skipped: 0,
        }
    }

    /// Parse a trace, skipping tokens that are not non-negative integers
    pub fn parse(input: &str) -> Self {
        let mut trace = Self::default();
        trace.push_tokens(input, 1);
        trace
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut trace = Self::default();
        for (index, line) in reader.lines().enumerate() {
            trace.push_tokens(&line?, index + 1);
        }
        Ok(trace)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn push_tokens(&mut self, text: &str, first_line: usize) {
        for (offset, line) in text.lines().enumerate() {
            for token in line.split_whitespace() {
                match token.parse::<Address>() {
                    Ok(address) => self.references.push(Reference::new(address)),
                    Err(_) => {
                        warn!(
                            "Skipping malformed reference '{}' on line {}",
                            token,
                            first_line + offset
                        );
                        self.skipped += 1;
                    }
                }
            }
        }
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Number of malformed tokens dropped while parsing
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_whitespace() {
        let trace = Trace::parse("0 4096\n8193\t\n  12\n");
        let addresses: Vec<_> = trace.references().iter().map(|r| r.address).collect();
        assert_eq!(addresses, vec![0, 4096, 8193, 12]);
        assert_eq!(trace.references()[2].access, AccessType::Write);
        assert_eq!(trace.skipped(), 0);
    }

    #[test]
    fn test_malformed_tokens_are_skipped() {
        let trace = Trace::parse("10 abc -4 20\n3.5 30");
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.skipped(), 3);
    }

    #[test]
    fn test_from_reader() {
        let input = "1\n2 3\n\n4\n";
        let trace = Trace::from_reader(input.as_bytes()).unwrap();
        assert_eq!(trace.len(), 4);
    }

    #[test]
    fn test_page_number() {
        let reference = Reference::new(8191);
        assert_eq!(reference.page_number(4096), 1);
        assert_eq!(Reference::new(8192).page_number(4096), 2);
    }

    #[test]
    fn test_empty_trace() {
        let trace = Trace::parse("   \n");
        assert!(trace.is_empty());
    }
}
