/// Print the expected spreadsheet layout and usage notes.
pub fn run() -> anyhow::Result<()> {
    print!("{}", listing());
    Ok(())
}

pub fn listing() -> &'static str {
    r#"Expected File Format
====================

Upload an Excel workbook (.xlsx). Only the first sheet is read and its first
row must hold the column names.

| Strike | Expiration | Option_Type | Moneyness | Delta | Gamma | Vanna | ... |
|--------|------------|-------------|-----------|-------|-------|-------|-----|

Required columns (numeric):
  - Gamma   bubble size is |Gamma| scaled so the largest exposure is 1
  - Delta   default X axis
  - Vanna   default Y axis

Used as defaults when present:
  - Moneyness     default Color By
  - Option_Type   default Hover Info

Derived columns added to every upload:
  - GammaExposure   |Gamma|
  - GammaScaled     GammaExposure / max(GammaExposure), labelled "Normalized Gamma Exposure"

How to use:
  1. Upload your options chain Excel file
  2. Ensure columns include: Gamma, Delta, Vanna
  3. Configure chart parameters (maximum bubble size 10-100, default 40)
  4. Interact with the visualization
"#
}
