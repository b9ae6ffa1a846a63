pub mod d400_design_summary;
