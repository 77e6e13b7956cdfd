//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure the parser correctly identifies and classifies errors
//! for malformed XML, schema violations, unsupported shapes and bad literals,
//! without panicking and without returning partial results.

use ethercat_esi::{
    load_esi_from_reader, load_esi_from_slice, load_esi_from_str, ErrorClass, EsiError,
    EsiOptions, EtherCatObjectSource,
};
use std::io::{self, Cursor, Read, Seek, SeekFrom};

/// A minimal valid ESI document used as a base for creating corrupted test cases.
const MINIMAL_VALID_XML: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<EtherCATInfo xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Vendor>
    <Id>2</Id>
  </Vendor>
  <Descriptions>
    <Devices>
      <Device>
        <Type ProductCode="#x00001234" RevisionNo="#x1">TestDevice</Type>
        <Name LcId="1033">Test Device</Name>
        <Profile>
          <Dictionary>
            <DataTypes>
              <DataType>
                <Name>DTARR</Name>
                <BaseType>USINT</BaseType>
                <BitSize>32</BitSize>
                <ArrayInfo>
                  <LBound>1</LBound>
                  <Elements>4</Elements>
                </ArrayInfo>
              </DataType>
              <DataType>
                <Name>DT2000</Name>
                <BitSize>48</BitSize>
                <SubItem>
                  <SubIdx>0</SubIdx>
                  <Name>SubIndex 000</Name>
                  <Type>USINT</Type>
                  <BitSize>8</BitSize>
                  <BitOffs>0</BitOffs>
                </SubItem>
                <SubItem>
                  <Name>Elements</Name>
                  <Type>DTARR</Type>
                  <BitSize>32</BitSize>
                  <BitOffs>16</BitOffs>
                  <Flags>
                    <Access>rw</Access>
                    <PdoMapping>T</PdoMapping>
                  </Flags>
                </SubItem>
              </DataType>
            </DataTypes>
            <Objects>
              <Object>
                <Index>#x2000</Index>
                <Name>Table</Name>
                <Type>DT2000</Type>
                <BitSize>48</BitSize>
                <Flags>
                  <Access>ro</Access>
                </Flags>
              </Object>
            </Objects>
          </Dictionary>
        </Profile>
        <RxPdo>
          <Index>#x1600</Index>
          <Name>Outputs A</Name>
          <Entry>
            <Index>#x7000</Index>
            <SubIndex>1</SubIndex>
            <BitLen>8</BitLen>
            <Name>Out</Name>
            <DataType>USINT</DataType>
          </Entry>
        </RxPdo>
        <RxPdo>
          <Index>#x1601</Index>
          <Name>Outputs B</Name>
          <Entry>
            <Index>#x0</Index>
            <BitLen>8</BitLen>
          </Entry>
          <Entry>
            <Index>#x7010</Index>
            <SubIndex>1</SubIndex>
            <BitLen>8</BitLen>
            <Name>Out</Name>
            <DataType>USINT</DataType>
          </Entry>
        </RxPdo>
        <TxPdo>
          <Index>#x1A00</Index>
          <Name>Inputs</Name>
          <Entry>
            <Index>#x6000</Index>
            <SubIndex>1</SubIndex>
            <BitLen>8</BitLen>
            <Name>In</Name>
            <DataType>USINT</DataType>
          </Entry>
        </TxPdo>
      </Device>
    </Devices>
  </Descriptions>
</EtherCATInfo>"##;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parse(xml: &str) -> Result<Vec<ethercat_esi::EtherCatDevice>, EsiError> {
    init_logger();
    load_esi_from_str(xml, &EsiOptions::default())
}

/// Sanity check: the unmodified template parses.
#[test]
fn test_minimal_valid() {
    let devices = parse(MINIMAL_VALID_XML).expect("Minimal document should parse");
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].product_code, 0x1234);
    assert_eq!(devices[0].revision_no, 1);
}

/// [dictionary, RxPDO#1, RxPDO#2, TxPDO#1], the gap entry in RxPDO#2 skipped.
#[test]
fn test_merge_ordering() {
    let devices = parse(MINIMAL_VALID_XML).unwrap();
    let sources: Vec<_> = devices[0]
        .objects
        .iter()
        .map(|o| o.source.clone().unwrap())
        .collect();
    assert_eq!(
        sources,
        vec![
            EtherCatObjectSource::Dictionary,
            EtherCatObjectSource::RxPdo {
                index: 0x1600,
                name: "Outputs A".into()
            },
            EtherCatObjectSource::RxPdo {
                index: 0x1601,
                name: "Outputs B".into()
            },
            EtherCatObjectSource::TxPdo {
                index: 0x1A00,
                name: "Inputs".into()
            },
        ]
    );
    let mut sorted = sources.clone();
    sorted.sort();
    assert_eq!(sorted, sources);
}

/// LBound 1, Elements 4: four elements replace the array reference.
#[test]
fn test_array_expansion_arity() {
    let devices = parse(MINIMAL_VALID_XML).unwrap();
    let table = &devices[0].objects[0];

    assert_eq!(table.objects.len(), 5);
    for (k, element) in table.objects.iter().enumerate().skip(1) {
        assert_eq!(element.sub_index, Some(k as u8));
        assert_eq!(element.name, format!("Element[{}]", k - 1));
        assert_eq!(element.data_type, "USINT");
        assert_eq!(element.bit_size, 8);
    }
}

/// Three sub-items are not an ARRAY shape, so nothing is expanded.
#[test]
fn test_non_array_shape_is_kept() {
    let xml = MINIMAL_VALID_XML.replace(
        "<Flags>\n                    <Access>rw</Access>",
        "<Flags>\n                    <Access>rw</Access>\n                  </Flags>\n                </SubItem>\n                <SubItem>\n                  <Name>Extra</Name>\n                  <Type>USINT</Type>\n                  <BitSize>8</BitSize>\n                  <BitOffs>48</BitOffs>\n                  <Flags>\n                    <Access>rw</Access>",
    );
    let devices = parse(&xml).unwrap();
    let table = &devices[0].objects[0];
    assert_eq!(table.objects.len(), 3);
    assert_eq!(table.objects[1].data_type, "DTARR");
    assert_eq!(table.objects[1].sub_index, None);
}

/// Verifies that the parser catches malformed XML syntax (e.g., unclosed tags).
#[test]
fn test_malformed_xml_syntax() {
    let xml = MINIMAL_VALID_XML.replace("</Vendor>", "");
    let result = parse(&xml);
    assert!(
        matches!(result, Err(EsiError::XmlSyntax { .. })),
        "Expected XmlSyntax error, got {:?}",
        result
    );
    assert_eq!(result.unwrap_err().class(), ErrorClass::ClientInput);

    let result = parse("<EtherCATInfo><Vendor>");
    assert!(matches!(result, Err(EsiError::XmlSyntax { .. })));
}

/// Schema violations carry the position of the offending element.
#[test]
fn test_schema_violation_location() {
    let xml = MINIMAL_VALID_XML.replace("</Vendor>", "</Vendor><Unknown/>");
    let err = parse(&xml).unwrap_err();
    assert!(
        matches!(
            err,
            EsiError::SchemaViolation {
                line: 5,
                column: 12,
                ..
            }
        ),
        "Unexpected error {:?}",
        err
    );
    assert!(err.to_string().contains("'Unknown'"), "{}", err);
    assert_eq!(err.class(), ErrorClass::ClientInput);
}

/// The validator rejects mandatory elements that are missing.
#[test]
fn test_missing_mandatory_element() {
    let xml = MINIMAL_VALID_XML.replace(
        "<BitLen>8</BitLen>\n            <Name>In</Name>",
        "<Name>In</Name>",
    );
    let result = parse(&xml);
    assert!(
        matches!(&result, Err(EsiError::SchemaViolation { message, .. }) if message.contains("BitLen")),
        "Expected SchemaViolation for BitLen, got {:?}",
        result
    );
}

#[test]
fn test_invalid_flag_value() {
    let xml = MINIMAL_VALID_XML.replace("<Access>ro</Access>", "<Access>read</Access>");
    assert!(matches!(parse(&xml), Err(EsiError::SchemaViolation { .. })));

    let xml = MINIMAL_VALID_XML.replace("<PdoMapping>T</PdoMapping>", "<PdoMapping>X</PdoMapping>");
    assert!(matches!(parse(&xml), Err(EsiError::SchemaViolation { .. })));
}

/// Negative bit sizes are rejected before deserialization.
#[test]
fn test_invalid_unsigned_value() {
    let xml = MINIMAL_VALID_XML.replace(
        "<BitSize>48</BitSize>\n                <Flags>",
        "<BitSize>-48</BitSize>\n                <Flags>",
    );
    assert!(matches!(parse(&xml), Err(EsiError::SchemaViolation { .. })));
}

#[test]
fn test_zero_devices() {
    let start = MINIMAL_VALID_XML.find("<Device>").unwrap();
    let end = MINIMAL_VALID_XML.find("</Devices>").unwrap();
    let xml = format!("{}{}", &MINIMAL_VALID_XML[..start], &MINIMAL_VALID_XML[end..]);

    let err = parse(&xml).unwrap_err();
    assert!(matches!(err, EsiError::NoDevicesFound));
    assert_eq!(err.class(), ErrorClass::Content);
    assert_eq!(
        err.to_string(),
        "XML content error: File contains no EtherCAT devices."
    );
}

#[test]
fn test_two_profiles() {
    let xml = MINIMAL_VALID_XML.replacen("<RxPdo>", "<Profile/>\n        <RxPdo>", 1);
    let err = parse(&xml).unwrap_err();
    assert!(
        matches!(err, EsiError::UnsupportedProfileCount { count: 2, .. }),
        "Unexpected error {:?}",
        err
    );
    assert_eq!(err.class(), ErrorClass::ClientInput);
}

#[test]
fn test_multiple_array_infos() {
    let xml = MINIMAL_VALID_XML.replace(
        "</ArrayInfo>",
        "</ArrayInfo>\n                <ArrayInfo><LBound>0</LBound><Elements>2</Elements></ArrayInfo>",
    );
    let err = parse(&xml).unwrap_err();
    assert!(matches!(
        err,
        EsiError::UnsupportedArrayInfoCount { count: 2, .. }
    ));
}

#[test]
fn test_literal_errors() {
    // Overflows i64: lexically valid, so it reaches the literal parser
    let xml = MINIMAL_VALID_XML.replace("<Index>#x2000</Index>", "<Index>#x1FFFFFFFFFFFFFFFF</Index>");
    assert!(matches!(parse(&xml), Err(EsiError::MalformedLiteral { .. })));

    let xml = MINIMAL_VALID_XML.replace("<Index>#x2000</Index>", "<Index>#x12000</Index>");
    assert!(matches!(
        parse(&xml),
        Err(EsiError::ValueOutOfRange { target: "u16", .. })
    ));

    let xml = MINIMAL_VALID_XML.replace("RevisionNo=\"#x1\"", "RevisionNo=\"-1\"");
    assert!(matches!(
        parse(&xml),
        Err(EsiError::ValueOutOfRange { target: "u32", .. })
    ));

    let xml = MINIMAL_VALID_XML.replace("<SubIndex>1</SubIndex>", "<SubIndex>#x100</SubIndex>");
    assert!(matches!(
        parse(&xml),
        Err(EsiError::ValueOutOfRange { target: "u8", .. })
    ));
}

#[test]
fn test_missing_product_code() {
    let xml = MINIMAL_VALID_XML.replace("ProductCode=\"#x00001234\" ", "");
    let err = parse(&xml).unwrap_err();
    assert!(matches!(
        err,
        EsiError::MissingElement {
            element: "ProductCode"
        }
    ));
}

#[test]
fn test_invalid_default_data() {
    let xml = MINIMAL_VALID_XML.replace(
        "<BitSize>48</BitSize>\n                <Flags>",
        "<BitSize>48</BitSize>\n                <Info><DefaultData>0</DefaultData></Info>\n                <Flags>",
    );
    // Odd length is not xs:hexBinary, so the validator rejects it first
    assert!(matches!(parse(&xml), Err(EsiError::SchemaViolation { .. })));
}

#[test]
fn test_module_document_has_no_devices() {
    let xml = r##"<?xml version="1.0"?>
<EtherCATModule>
  <Vendor><Id>2</Id></Vendor>
  <Modules/>
</EtherCATModule>"##;
    let err = parse(xml).unwrap_err();
    assert!(matches!(
        err,
        EsiError::MissingElement {
            element: "EtherCATInfo"
        }
    ));
}

/// Entities and character references are decoded in names.
#[test]
fn test_entities_in_names() {
    let xml = MINIMAL_VALID_XML.replace("Outputs A", "Outputs &amp; &#x41;");
    let devices = parse(&xml).unwrap();
    assert_eq!(
        devices[0].objects[1].source,
        Some(EtherCatObjectSource::RxPdo {
            index: 0x1600,
            name: "Outputs & A".into()
        })
    );
}

#[test]
fn test_latin1_document() {
    init_logger();
    let xml = MINIMAL_VALID_XML
        .replace("encoding=\"utf-8\"", "encoding=\"ISO-8859-1\"")
        .replace("Test Device", "Test Ger\u{e4}t");
    // Encode as ISO-8859-1: every char is below U+0100
    let bytes: Vec<u8> = xml.chars().map(|c| c as u8).collect();

    let devices = load_esi_from_slice(&bytes, &EsiOptions::default()).unwrap();
    assert_eq!(devices[0].name, "Test Gerät");

    // The same bytes are not valid UTF-8
    let utf8 = xml.replace("encoding=\"ISO-8859-1\"", "encoding=\"utf-8\"");
    let bytes: Vec<u8> = utf8.chars().map(|c| c as u8).collect();
    let err = load_esi_from_slice(&bytes, &EsiOptions::default()).unwrap_err();
    assert!(matches!(err, EsiError::XmlSyntax { line: 10, .. }), "{:?}", err);
}

/// `ISO8859-1` (without the first hyphen) is a common vendor spelling.
#[test]
fn test_latin1_alias_declaration() {
    init_logger();
    let xml = MINIMAL_VALID_XML
        .replace("encoding=\"utf-8\"", "encoding=\"ISO8859-1\"")
        .replace("Test Device", "Test Ger\u{e4}t");
    let bytes: Vec<u8> = xml.chars().map(|c| c as u8).collect();

    let devices = load_esi_from_slice(&bytes, &EsiOptions::default()).unwrap();
    assert_eq!(devices[0].name, "Test Gerät");
}

/// A reader that fails after the first read, to check the stream is rewound anyway.
struct FailingReader {
    inner: Cursor<Vec<u8>>,
    reads: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        if self.reads > 1 {
            return Err(io::Error::other("connection reset"));
        }
        let n = buf.len().min(16);
        self.inner.read(&mut buf[..n])
    }
}

impl Seek for FailingReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

#[test]
fn test_io_error_rewinds() {
    init_logger();
    let mut reader = FailingReader {
        inner: Cursor::new(MINIMAL_VALID_XML.as_bytes().to_vec()),
        reads: 0,
    };
    let err = load_esi_from_reader(&mut reader, &EsiOptions::default()).unwrap_err();
    assert!(matches!(err, EsiError::Io(_)));
    assert_eq!(err.class(), ErrorClass::Internal);
    assert_eq!(reader.inner.position(), 0);
}
