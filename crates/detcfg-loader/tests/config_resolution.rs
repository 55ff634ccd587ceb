use std::path::{Path, PathBuf};

use detcfg_core::{CfgNode, CfgValue};
use detcfg_loader::{load_cfg, load_cfg_with_defaults};
use detcfg_registry::{check_choice, Registry};

fn configs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs")
}

fn config(name: &str) -> PathBuf {
    configs_dir().join(name)
}

#[test]
fn every_shipped_config_resolves() {
    let mut seen = 0;
    for entry in std::fs::read_dir(configs_dir()).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map_or(false, |ext| ext == "yaml") {
            load_cfg(&path).unwrap_or_else(|err| panic!("{path:?}: {err}"));
            seen += 1;
        }
    }
    assert!(seen >= 4, "expected the shipped documents, found {seen}");
}

#[test]
fn video_segmentation_child_overrides_base() {
    let cfg = load_cfg(config("FCN_R_50_FCNFPN_3x_FLOW.yaml")).unwrap();

    assert_eq!(
        cfg.get_str("MODEL.META_ARCHITECTURE").unwrap(),
        "VideoSemanticSegmentor"
    );
    assert_eq!(cfg.get_i64("SOLVER.MAX_ITER").unwrap(), 90000);
    assert_eq!(cfg.get_str("MODEL.EXTRA_NECK.NAME").unwrap(), "BFP_TCEA");
    assert_eq!(cfg.get_f64("SOLVER.BASE_LR").unwrap(), 0.01);

    // fields the child never mentions come from the base unchanged
    assert_eq!(
        cfg.get_str("MODEL.WEIGHTS").unwrap(),
        "detectron2://ImageNetPretrained/MSRA/R-50.pkl"
    );
    assert_eq!(cfg.get_str("MODEL.ROI_HEADS.NAME").unwrap(), "StandardROIHeads");
    assert_eq!(cfg.get_i64("SOLVER.IMS_PER_BATCH").unwrap(), 8);
}

#[test]
fn size_ranges_are_numeric_pairs() {
    let cfg = load_cfg(config("FCN_R_50_FCNFPN_3x_FLOW.yaml")).unwrap();
    assert_eq!(
        cfg.get_pair("INPUT.MIN_SIZE_TRAIN").unwrap(),
        (900.0, 1350.0)
    );

    let base = load_cfg(config("Base-RCNN-FPN.yaml")).unwrap();
    let sizes = base.get_tuple("INPUT.MIN_SIZE_TRAIN").unwrap();
    assert_eq!(sizes.len(), 6);
    assert!(sizes.iter().all(|v| v.as_i64().is_some()));
}

#[test]
fn dataset_tuples_are_string_tuples() {
    let cfg = load_cfg(config("FCN_R_50_FCNFPN_3x_FLOW.yaml")).unwrap();
    let train = cfg.get_tuple("DATASETS.TRAIN").unwrap();
    assert_eq!(
        train,
        &[CfgValue::Str("cityscapes_video_fine_sem_seg_train".to_string())]
    );
}

#[test]
fn defaults_fill_untouched_sections() {
    let cfg = load_cfg_with_defaults(config("FCN_R_50_FCNFPN_3x_FLOW.yaml")).unwrap();

    // set by the chain
    assert!(cfg.get_bool("INPUT.FLOW_ON").unwrap());
    assert_eq!(
        cfg.get_str("OUTPUT_DIR").unwrap(),
        "./output/FCN_R_50_FCNFPN_3x_FLOW"
    );
    // never touched by any document in the chain
    assert_eq!(cfg.get_i64("MODEL.BACKBONE.FREEZE_AT").unwrap(), 2);
    assert_eq!(cfg.get_i64("DATALOADER.NUM_WORKERS").unwrap(), 4);
    assert_eq!(cfg.get_f64("SOLVER.MOMENTUM").unwrap(), 0.9);
    assert_eq!(cfg.get_str("INPUT.FORMAT").unwrap(), "BGR");
}

#[test]
fn resolution_is_idempotent_under_remerge() {
    let resolved = load_cfg(config("FCN_R_50_FCNFPN_3x_FLOW.yaml")).unwrap();

    let child_text =
        std::fs::read_to_string(config("FCN_R_50_FCNFPN_3x_FLOW.yaml")).unwrap();
    let mut child = CfgNode::from_yaml_str(&child_text).unwrap();
    child.remove("_BASE_");

    let mut remerged = resolved.clone();
    remerged.merge_from(&child);
    assert_eq!(resolved, remerged);
}

#[test]
fn fcos_child_inherits_head_settings() {
    let cfg = load_cfg_with_defaults(config("FCOS_R_50_FPN_1x.yaml")).unwrap();

    assert_eq!(cfg.get_str("MODEL.META_ARCHITECTURE").unwrap(), "OneStageDetector");
    assert_eq!(cfg.get_str("MODEL.PROPOSAL_GENERATOR.NAME").unwrap(), "FCOS");
    assert_eq!(cfg.get_str("MODEL.FCOS.HEAD_NAME").unwrap(), "FCOSHead");
    assert_eq!(cfg.get_f64("MODEL.FCOS.NMS_TH").unwrap(), 0.6);
    assert_eq!(cfg.get_i64("MODEL.RESNETS.DEPTH").unwrap(), 50);
    // default survives: the FCOS chain never mentions it
    assert_eq!(cfg.get_f64("MODEL.FCOS.INFERENCE_TH").unwrap(), 0.05);
}

#[test]
fn shipped_choice_fields_resolve_in_registries() {
    fn named(_cfg: &CfgNode) -> &'static str {
        "component"
    }

    let mut meta_archs = Registry::new("META_ARCHITECTURE");
    for name in ["GeneralizedRCNN", "OneStageDetector", "VideoSemanticSegmentor"] {
        meta_archs.register(name, named).unwrap();
    }
    let mut backbones = Registry::new("BACKBONE");
    for name in [
        "build_resnet_backbone",
        "build_resnet_fpn_backbone",
        "build_resnet_fcn_fpn_backbone",
        "build_fcos_resnet_fpn_backbone",
    ] {
        backbones.register(name, named).unwrap();
    }
    let mut necks = Registry::new("EXTRA_NECK");
    necks.register("BFP_TCEA", named).unwrap();
    let mut sem_seg_heads = Registry::new("SEM_SEG_HEAD");
    sem_seg_heads.register("SemSegFPNHead", named).unwrap();

    for name in [
        "Base-RCNN-FPN.yaml",
        "Base-FCOS.yaml",
        "FCN_R_50_FCNFPN_3x_FLOW.yaml",
        "FCOS_R_50_FPN_1x.yaml",
    ] {
        let cfg = load_cfg(config(name)).unwrap();
        check_choice(&meta_archs, &cfg, "MODEL.META_ARCHITECTURE")
            .unwrap_or_else(|err| panic!("{name}: {err}"));
        check_choice(&backbones, &cfg, "MODEL.BACKBONE.NAME")
            .unwrap_or_else(|err| panic!("{name}: {err}"));
        check_choice(&necks, &cfg, "MODEL.EXTRA_NECK.NAME")
            .unwrap_or_else(|err| panic!("{name}: {err}"));
        check_choice(&sem_seg_heads, &cfg, "MODEL.SEM_SEG_HEAD.NAME")
            .unwrap_or_else(|err| panic!("{name}: {err}"));
    }
}
