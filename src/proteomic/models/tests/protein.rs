use crate::proteomic::models::protein::ProteinRecord;

const O95139_HEADER: &str = ">sp|O95139|NDUB6_HUMAN NADH dehydrogenase [ubiquinone] 1 beta subcomplex subunit 6 OS=Homo sapiens OX=9606 GN=NDUFB6 PE=1 SV=3";
const O95139_SEQUENCE: &str = "MTGYTPDEKLRLQQLRELRRRWLKDQELSPREPVLPPQKMGPMEKFWNKFLENKSPWRKMVHGVYKKSIFVFTHVLVPVWIIHYYMKYHVSEKPYGIVEKKSRIFPGDTILETGEVIPPMKEFPDQHH";

#[test]
pub fn test_equality() {
    let pro1 = ProteinRecord::from_header(O95139_HEADER, O95139_SEQUENCE).unwrap();
    let pro2 = ProteinRecord::from_header(O95139_HEADER, O95139_SEQUENCE).unwrap();
    assert!(pro1 == pro2);
}

#[test]
pub fn test_unequlity() {
    let pro1 = ProteinRecord::from_header(O95139_HEADER, O95139_SEQUENCE).unwrap();
    let pro2 = ProteinRecord::from_header(
        ">sp|O75438|NDUB1_HUMAN NADH dehydrogenase [ubiquinone] 1 beta subcomplex subunit 1 OS=Homo sapiens OX=9606 GN=NDUFB1 PE=1 SV=1",
        "MVNLLQIVRDHWVHVLVPMGFVIGCYLDRKSDERLTAFRNKSMLFKRELQPSEEVTWK"
    ).unwrap();
    assert!(pro1 != pro2);
}

#[test]
pub fn test_header_parts() {
    let protein = ProteinRecord::from_header(O95139_HEADER, O95139_SEQUENCE).unwrap();
    assert_eq!(protein.get_identifier(), "sp|O95139|NDUB6_HUMAN");
    assert!(protein.get_description().starts_with("NADH dehydrogenase"));
    assert_eq!(protein.get_accession(), "O95139");
    assert_eq!(protein.get_header(), O95139_HEADER);
    assert_eq!(protein.as_fasta_entry(), format!("{}\n{}\n", O95139_HEADER, O95139_SEQUENCE));
}

#[test]
pub fn test_header_without_description() {
    let protein = ProteinRecord::from_header(">my_protein", "MKR").unwrap();
    assert_eq!(protein.get_identifier(), "my_protein");
    assert_eq!(protein.get_description(), "");
    // no UniProt accession inside
    assert_eq!(protein.get_accession(), "my_protein");
    assert_eq!(protein.get_header(), ">my_protein");
}

#[test]
pub fn test_header_without_identifier() {
    assert!(ProteinRecord::from_header(">", "MKR").is_none());
    assert!(ProteinRecord::from_header(">   ", "MKR").is_none());
}

#[test]
fn test_accession_of_many_proteins() {
    let identifiers = ["sp|P77377|WZXC_ECOLI", "tr|A0A024R161|A0A024R161_HUMAN", "sp|Q9H9K5|ERVV1_HUMAN", "contaminant_42"];
    let expected = ["P77377", "A0A024R161", "Q9H9K5", "contaminant_42"];
    for _ in 0..100 {
        for (identifier, accession) in identifiers.iter().zip(expected.iter()) {
            assert_eq!(ProteinRecord::new(identifier, "", "MK").get_accession(), *accession);
        }
    }
}
