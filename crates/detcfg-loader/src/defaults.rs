//! Default values for the configuration sections the training framework
//! defines. Every shipped document is merged over this tree, so a child
//! only has to state what it changes.

use detcfg_core::{CfgNode, CfgValue};

fn ints(values: impl IntoIterator<Item = i64>) -> Vec<CfgValue> {
    values.into_iter().map(CfgValue::Int).collect()
}

fn floats(values: impl IntoIterator<Item = f64>) -> Vec<CfgValue> {
    values.into_iter().map(CfgValue::Float).collect()
}

fn strs<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<CfgValue> {
    values.into_iter().map(CfgValue::from).collect()
}

/// Builds the framework default configuration tree.
pub fn defaults() -> CfgNode {
    let mut cfg = CfgNode::new();
    cfg.insert("MODEL", model_defaults());
    cfg.insert("INPUT", input_defaults());
    cfg.insert("DATASETS", datasets_defaults());
    cfg.insert("DATALOADER", dataloader_defaults());
    cfg.insert("SOLVER", solver_defaults());
    cfg.insert("TEST", test_defaults());
    cfg.insert("OUTPUT_DIR", "./output");
    cfg.insert("SEED", -1);
    cfg.insert("CUDNN_BENCHMARK", false);
    cfg.insert("VERSION", 2);
    cfg
}

fn model_defaults() -> CfgNode {
    let mut model = CfgNode::new();
    model.insert("DEVICE", "cuda");
    model.insert("META_ARCHITECTURE", "GeneralizedRCNN");
    model.insert("WEIGHTS", "");
    model.insert("MASK_ON", false);
    model.insert("KEYPOINT_ON", false);
    model.insert("LOAD_PROPOSALS", false);
    model.insert(
        "PIXEL_MEAN",
        CfgValue::tuple(floats([103.53, 116.28, 123.675])),
    );
    model.insert("PIXEL_STD", CfgValue::tuple(floats([1.0, 1.0, 1.0])));

    let mut backbone = CfgNode::new();
    backbone.insert("NAME", "build_resnet_backbone");
    backbone.insert("FREEZE_AT", 2);
    model.insert("BACKBONE", backbone);

    let mut fpn = CfgNode::new();
    fpn.insert("IN_FEATURES", CfgValue::list([]));
    fpn.insert("OUT_CHANNELS", 256);
    fpn.insert("NORM", "");
    fpn.insert("FUSE_TYPE", "sum");
    model.insert("FPN", fpn);

    let mut resnets = CfgNode::new();
    resnets.insert("DEPTH", 50);
    resnets.insert("OUT_FEATURES", CfgValue::list(strs(["res4"])));
    resnets.insert("NUM_GROUPS", 1);
    resnets.insert("NORM", "FrozenBN");
    resnets.insert("WIDTH_PER_GROUP", 64);
    resnets.insert("STRIDE_IN_1X1", true);
    resnets.insert("RES2_OUT_CHANNELS", 256);
    resnets.insert("STEM_OUT_CHANNELS", 64);
    model.insert("RESNETS", resnets);

    let mut anchors = CfgNode::new();
    anchors.insert(
        "SIZES",
        CfgValue::list([CfgValue::list(ints([32, 64, 128, 256, 512]))]),
    );
    anchors.insert(
        "ASPECT_RATIOS",
        CfgValue::list([CfgValue::list(floats([0.5, 1.0, 2.0]))]),
    );
    model.insert("ANCHOR_GENERATOR", anchors);

    let mut rpn = CfgNode::new();
    rpn.insert("IN_FEATURES", CfgValue::list(strs(["res4"])));
    rpn.insert("PRE_NMS_TOPK_TRAIN", 12000);
    rpn.insert("PRE_NMS_TOPK_TEST", 6000);
    rpn.insert("POST_NMS_TOPK_TRAIN", 2000);
    rpn.insert("POST_NMS_TOPK_TEST", 1000);
    rpn.insert("NMS_THRESH", 0.7);
    rpn.insert("BATCH_SIZE_PER_IMAGE", 256);
    rpn.insert("POSITIVE_FRACTION", 0.5);
    model.insert("RPN", rpn);

    let mut proposal_generator = CfgNode::new();
    proposal_generator.insert("NAME", "RPN");
    proposal_generator.insert("MIN_SIZE", 0);
    model.insert("PROPOSAL_GENERATOR", proposal_generator);

    let mut roi_heads = CfgNode::new();
    roi_heads.insert("NAME", "Res5ROIHeads");
    roi_heads.insert("NUM_CLASSES", 80);
    roi_heads.insert("IN_FEATURES", CfgValue::list(strs(["res4"])));
    roi_heads.insert("SCORE_THRESH_TEST", 0.05);
    roi_heads.insert("NMS_THRESH_TEST", 0.5);
    roi_heads.insert("BATCH_SIZE_PER_IMAGE", 512);
    roi_heads.insert("POSITIVE_FRACTION", 0.25);
    model.insert("ROI_HEADS", roi_heads);

    let mut roi_box_head = CfgNode::new();
    roi_box_head.insert("NAME", "");
    roi_box_head.insert("POOLER_RESOLUTION", 14);
    roi_box_head.insert("POOLER_SAMPLING_RATIO", 0);
    roi_box_head.insert("POOLER_TYPE", "ROIAlignV2");
    roi_box_head.insert("NUM_FC", 0);
    roi_box_head.insert("FC_DIM", 1024);
    roi_box_head.insert("NUM_CONV", 0);
    roi_box_head.insert("CONV_DIM", 256);
    roi_box_head.insert("NORM", "");
    model.insert("ROI_BOX_HEAD", roi_box_head);

    let mut sem_seg_head = CfgNode::new();
    sem_seg_head.insert("NAME", "SemSegFPNHead");
    sem_seg_head.insert("IN_FEATURES", CfgValue::list(strs(["p2", "p3", "p4", "p5"])));
    sem_seg_head.insert("NUM_CLASSES", 54);
    sem_seg_head.insert("IGNORE_VALUE", 255);
    sem_seg_head.insert("LOSS_WEIGHT", 1.0);
    sem_seg_head.insert("CONVS_DIM", 128);
    sem_seg_head.insert("COMMON_STRIDE", 4);
    sem_seg_head.insert("NORM", "GN");
    model.insert("SEM_SEG_HEAD", sem_seg_head);

    // temporal feature aggregation neck, off unless a document names one
    let mut extra_neck = CfgNode::new();
    extra_neck.insert("NAME", "");
    extra_neck.insert("IN_FEATURES", CfgValue::list([]));
    extra_neck.insert("OUT_CHANNELS", 256);
    extra_neck.insert("REFINE_LEVEL", 2);
    extra_neck.insert("REFINE_TYPE", "non_local");
    model.insert("EXTRA_NECK", extra_neck);

    let mut fcos = CfgNode::new();
    fcos.insert("HEAD_NAME", "FCOSHead");
    fcos.insert("NUM_CLASSES", 80);
    fcos.insert("IN_FEATURES", CfgValue::list(strs(["p3", "p4", "p5", "p6", "p7"])));
    fcos.insert("FPN_STRIDES", CfgValue::list(ints([8, 16, 32, 64, 128])));
    fcos.insert("PRIOR_PROB", 0.01);
    fcos.insert("INFERENCE_TH", 0.05);
    fcos.insert("NMS_TH", 0.6);
    fcos.insert("PRE_NMS_TOP_N", 1000);
    fcos.insert("POST_NMS_TOP_N", 100);
    fcos.insert("NUM_CONVS", 4);
    fcos.insert("NORM_REG_TARGETS", true);
    fcos.insert("CENTERNESS_ON_REG", true);
    fcos.insert("CENTER_SAMPLING_RADIUS", 1.5);
    fcos.insert("IOU_LOSS_TYPE", "giou");
    model.insert("FCOS", fcos);

    model
}

fn input_defaults() -> CfgNode {
    let mut input = CfgNode::new();
    input.insert("MIN_SIZE_TRAIN", CfgValue::tuple(ints([800])));
    input.insert("MIN_SIZE_TRAIN_SAMPLING", "choice");
    input.insert("MAX_SIZE_TRAIN", 1333);
    input.insert("MIN_SIZE_TEST", 800);
    input.insert("MAX_SIZE_TEST", 1333);
    input.insert("FORMAT", "BGR");
    input.insert("MASK_FORMAT", "polygon");
    input.insert("FLOW_ON", false);

    let mut crop = CfgNode::new();
    crop.insert("ENABLED", false);
    crop.insert("TYPE", "relative_range");
    crop.insert("SIZE", CfgValue::tuple(floats([0.9, 0.9])));
    input.insert("CROP", crop);

    input
}

fn datasets_defaults() -> CfgNode {
    let mut datasets = CfgNode::new();
    datasets.insert("TRAIN", CfgValue::tuple([]));
    datasets.insert("TEST", CfgValue::tuple([]));
    datasets.insert("PROPOSAL_FILES_TRAIN", CfgValue::tuple([]));
    datasets.insert("PROPOSAL_FILES_TEST", CfgValue::tuple([]));
    datasets
}

fn dataloader_defaults() -> CfgNode {
    let mut dataloader = CfgNode::new();
    dataloader.insert("NUM_WORKERS", 4);
    dataloader.insert("ASPECT_RATIO_GROUPING", true);
    dataloader.insert("SAMPLER_TRAIN", "TrainingSampler");
    dataloader.insert("FILTER_EMPTY_ANNOTATIONS", true);
    dataloader
}

fn solver_defaults() -> CfgNode {
    let mut solver = CfgNode::new();
    solver.insert("LR_SCHEDULER_NAME", "WarmupMultiStepLR");
    solver.insert("IMS_PER_BATCH", 16);
    solver.insert("BASE_LR", 0.001);
    solver.insert("MOMENTUM", 0.9);
    solver.insert("WEIGHT_DECAY", 0.0001);
    solver.insert("WEIGHT_DECAY_NORM", 0.0);
    solver.insert("GAMMA", 0.1);
    solver.insert("STEPS", CfgValue::tuple(ints([30000])));
    solver.insert("MAX_ITER", 40000);
    solver.insert("WARMUP_FACTOR", 0.001);
    solver.insert("WARMUP_ITERS", 1000);
    solver.insert("WARMUP_METHOD", "linear");
    solver.insert("CHECKPOINT_PERIOD", 5000);
    solver
}

fn test_defaults() -> CfgNode {
    let mut test = CfgNode::new();
    test.insert("EVAL_PERIOD", 0);
    test.insert("EXPECTED_RESULTS", CfgValue::list([]));
    test.insert("DETECTIONS_PER_IMAGE", 100);

    let mut aug = CfgNode::new();
    aug.insert("ENABLED", false);
    aug.insert(
        "MIN_SIZES",
        CfgValue::tuple(ints([400, 500, 600, 700, 800, 900, 1000, 1100, 1200])),
    );
    aug.insert("MAX_SIZE", 4000);
    aug.insert("FLIP", true);
    test.insert("AUG", aug);

    let mut precise_bn = CfgNode::new();
    precise_bn.insert("ENABLED", false);
    precise_bn.insert("NUM_ITER", 200);
    test.insert("PRECISE_BN", precise_bn);

    test
}
