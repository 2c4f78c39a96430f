//! Generators for the per-document XML parts of the package.
//!
//! Each generator is pure string templating: the same inputs always produce
//! byte-identical output. The consuming format resolves parts purely by path
//! string, so every name here has to agree with what the other parts
//! reference; [`SlideId`] is the single value those names derive from.

use deck_core::{Canvas, Error, Placement, Result};
use quick_xml::escape::escape;

/// 1-based slide identity.
///
/// The slide part name, the media name, and the relationship ids are all
/// derived from this one value; the parts that must agree on a name all
/// thread the same `SlideId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideId(usize);

impl SlideId {
    /// Wrap a 1-based slide position.
    pub fn new(position: usize) -> Result<Self> {
        if position == 0 {
            return Err(Error::Validation(
                "slide positions are 1-based".to_string(),
            ));
        }
        Ok(Self(position))
    }

    /// `slideN`, the base name of the slide part.
    pub fn slide_name(&self) -> String {
        format!("slide{}", self.0)
    }

    /// `slideNImage`, the media name, reused as the slide's relationship id.
    pub fn image_id(&self) -> String {
        format!("slide{}Image", self.0)
    }

    /// `ppt/media/slideNImage.png`
    pub fn media_path(&self) -> String {
        format!("ppt/media/{}.png", self.image_id())
    }

    /// `ppt/slides/slideN.xml`
    pub fn slide_path(&self) -> String {
        format!("ppt/slides/{}.xml", self.slide_name())
    }

    /// `ppt/slides/_rels/slideN.xml.rels`
    pub fn rels_path(&self) -> String {
        format!("ppt/slides/_rels/{}.xml.rels", self.slide_name())
    }

    /// `rIdN+1` in the presentation part; `rId1` is the slide master.
    pub fn presentation_rel_id(&self) -> String {
        format!("rId{}", self.0 + 1)
    }

    /// Numeric id in `p:sldIdLst`; the format requires 256 or greater.
    pub fn sld_id(&self) -> usize {
        255 + self.0
    }
}

/// Relationship part of one slide: its single relationship is the image.
pub fn slide_rels_xml(id: SlideId) -> String {
    let image_id = id.image_id();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="{image_id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/{image_id}.png"/>
</Relationships>
"#,
        image_id = image_id
    )
}

/// One slide's shape tree: a title text box and the picture shape at its
/// fitted placement. EMU values are emitted as-is; the title is XML-escaped.
pub fn slide_xml(id: SlideId, title: &str, placement: &Placement) -> String {
    let title = escape(title);
    let image_id = id.image_id();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld><p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>
<p:sp>
<p:nvSpPr><p:cNvPr id="2" name="Title"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
<p:spPr><a:xfrm><a:off x="457200" y="152400"/><a:ext cx="11277600" cy="685800"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:pPr algn="ctr"/><a:r><a:rPr lang="en-US" sz="2800" b="1"/><a:t>{title}</a:t></a:r></a:p></p:txBody>
</p:sp>
<p:pic>
<p:nvPicPr><p:cNvPr id="3" name="{image_id}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr>
<p:blipFill><a:blip r:embed="{image_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>
<p:spPr><a:xfrm><a:off x="{left}" y="{top}"/><a:ext cx="{width}" cy="{height}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
</p:pic>
</p:spTree></p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>
"#,
        title = title,
        image_id = image_id,
        left = placement.left,
        top = placement.top,
        width = placement.width,
        height = placement.height,
    )
}

/// `[Content_Types].xml`: extension defaults plus one override per static
/// XML part and per slide, in slide order.
pub fn content_types_xml(ids: &[SlideId]) -> String {
    let mut slide_overrides = String::new();
    for id in ids {
        slide_overrides.push_str(&format!(
            "<Override PartName=\"/{}\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n",
            id.slide_path()
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Default Extension="png" ContentType="image/png"/>
<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
{slide_overrides}</Types>
"#,
        slide_overrides = slide_overrides
    )
}

/// `ppt/_rels/presentation.xml.rels`: the fixed slide-master relationship
/// plus one relationship per slide, in slide order.
pub fn presentation_rels_xml(ids: &[SlideId]) -> String {
    let mut rels = String::from(
        "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\" Target=\"slideMasters/slideMaster1.xml\"/>\n",
    );
    for id in ids {
        rels.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"slides/{}.xml\"/>\n",
            id.presentation_rel_id(),
            id.slide_name()
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
{rels}</Relationships>
"#,
        rels = rels
    )
}

/// `ppt/presentation.xml`: master list, the ordered slide id list that
/// establishes presentation order, and the slide size from the canvas.
pub fn presentation_xml(ids: &[SlideId], canvas: Canvas) -> String {
    let mut sld_ids = String::new();
    for id in ids {
        sld_ids.push_str(&format!(
            "<p:sldId id=\"{}\" r:id=\"{}\"/>",
            id.sld_id(),
            id.presentation_rel_id()
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
<p:sldIdLst>{sld_ids}</p:sldIdLst>
<p:sldSz cx="{width}" cy="{height}"/>
<p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>
"#,
        sld_ids = sld_ids,
        width = canvas.width,
        height = canvas.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_id_is_one_based() {
        assert!(matches!(SlideId::new(0), Err(Error::Validation(_))));
        assert!(SlideId::new(1).is_ok());
    }

    #[test]
    fn test_slide_id_derived_names_agree() {
        let id = SlideId::new(3).unwrap();

        assert_eq!(id.slide_name(), "slide3");
        assert_eq!(id.image_id(), "slide3Image");
        assert_eq!(id.media_path(), "ppt/media/slide3Image.png");
        assert_eq!(id.slide_path(), "ppt/slides/slide3.xml");
        assert_eq!(id.rels_path(), "ppt/slides/_rels/slide3.xml.rels");
        assert_eq!(id.presentation_rel_id(), "rId4");
        assert_eq!(id.sld_id(), 258);
    }

    #[test]
    fn test_slide_rels_points_at_media() {
        let xml = slide_rels_xml(SlideId::new(1).unwrap());

        assert!(xml.contains("Id=\"slide1Image\""));
        assert!(xml.contains("Target=\"../media/slide1Image.png\""));
    }

    #[test]
    fn test_slide_xml_embeds_placement() {
        let placement = Placement {
            width: 6_858_000,
            height: 6_858_000,
            top: 0,
            left: 2_667_000,
        };
        let xml = slide_xml(SlideId::new(1).unwrap(), "Overview", &placement);

        assert!(xml.contains("<a:t>Overview</a:t>"));
        assert!(xml.contains("r:embed=\"slide1Image\""));
        assert!(xml.contains("<a:off x=\"2667000\" y=\"0\"/>"));
        assert!(xml.contains("<a:ext cx=\"6858000\" cy=\"6858000\"/>"));
    }

    #[test]
    fn test_slide_xml_escapes_title() {
        let placement = Placement {
            width: 1,
            height: 1,
            top: 0,
            left: 0,
        };
        let xml = slide_xml(SlideId::new(1).unwrap(), "a < b & \"c\"", &placement);

        assert!(xml.contains("a &lt; b &amp; &quot;c&quot;"));
        assert!(!xml.contains("a < b"));
    }

    #[test]
    fn test_slide_xml_allows_negative_offsets() {
        let placement = Placement {
            width: 12_192_000,
            height: 24_384_000,
            top: -8_763_000,
            left: 0,
        };
        let xml = slide_xml(SlideId::new(1).unwrap(), "wide", &placement);

        assert!(xml.contains("<a:off x=\"0\" y=\"-8763000\"/>"));
    }

    #[test]
    fn test_content_types_lists_each_slide_once_in_order() {
        let ids = vec![SlideId::new(1).unwrap(), SlideId::new(2).unwrap()];
        let xml = content_types_xml(&ids);

        let first = xml.find("/ppt/slides/slide1.xml").unwrap();
        let second = xml.find("/ppt/slides/slide2.xml").unwrap();
        assert!(first < second);
        assert_eq!(xml.matches("/ppt/slides/slide1.xml").count(), 1);
        assert_eq!(xml.matches("presentationml.slide+xml").count(), 2);
    }

    #[test]
    fn test_presentation_rels_keeps_master_first() {
        let ids = vec![SlideId::new(1).unwrap(), SlideId::new(2).unwrap()];
        let xml = presentation_rels_xml(&ids);

        assert!(xml.contains("Id=\"rId1\""));
        assert!(xml.contains("Target=\"slideMasters/slideMaster1.xml\""));
        assert!(xml.contains("Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"slides/slide1.xml\""));
        assert!(xml.contains("Id=\"rId3\""));
    }

    #[test]
    fn test_presentation_xml_orders_slides_and_sizes_canvas() {
        let ids = vec![SlideId::new(1).unwrap(), SlideId::new(2).unwrap()];
        let xml = presentation_xml(&ids, Canvas::default());

        assert!(xml.contains(
            "<p:sldIdLst><p:sldId id=\"256\" r:id=\"rId2\"/><p:sldId id=\"257\" r:id=\"rId3\"/></p:sldIdLst>"
        ));
        assert!(xml.contains("<p:sldSz cx=\"12192000\" cy=\"6858000\"/>"));
    }

    #[test]
    fn test_generators_are_byte_stable() {
        let ids = vec![SlideId::new(1).unwrap()];
        assert_eq!(content_types_xml(&ids), content_types_xml(&ids));
        assert_eq!(presentation_rels_xml(&ids), presentation_rels_xml(&ids));
    }

    #[test]
    fn test_empty_deck_still_forms_valid_parts() {
        let xml = presentation_xml(&[], Canvas::default());
        assert!(xml.contains("<p:sldIdLst></p:sldIdLst>"));

        let types = content_types_xml(&[]);
        assert!(!types.contains("/ppt/slides/"));
    }
}
