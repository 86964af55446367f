// crates/lcec-configgen/src/drivers/builtin.rs

// Generated from the `lcec_devices` listing of supported drivers. Do not edit by hand.

use super::BuiltinDriver;

pub(super) static BUILTIN_DRIVERS: &[BuiltinDriver] = &[
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x13ed6012, type_name: "AX5101" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x13ef6012, type_name: "AX5103" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x13f26012, type_name: "AX5106" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x13f86012, type_name: "AX5112" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x13fe6012, type_name: "AX5118" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x14536012, type_name: "AX5203" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x14566012, type_name: "AX5206" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x16ad6012, type_name: "AX5805" },
    BuiltinDriver { vendor_id: 0x000001dd, product_id: 0x10400200, type_name: "DEMS300" },
    BuiltinDriver { vendor_id: 0x000001dd, product_id: 0x10305070, type_name: "DEASDA" },
    BuiltinDriver { vendor_id: 0x000001dd, product_id: 0x00006010, type_name: "DEASDA3" },
    BuiltinDriver { vendor_id: 0x000001dd, product_id: 0x00006080, type_name: "DeASDB3" },
    BuiltinDriver { vendor_id: 0x00000a88, product_id: 0x0a880001, type_name: "ECR60" },
    BuiltinDriver { vendor_id: 0x00000a88, product_id: 0x0a880005, type_name: "ECR60x2" },
    BuiltinDriver { vendor_id: 0x00000a88, product_id: 0x0a880003, type_name: "ECR86" },
    BuiltinDriver { vendor_id: 0x00000a88, product_id: 0x0a880002, type_name: "ECT60" },
    BuiltinDriver { vendor_id: 0x00000a88, product_id: 0x0a880006, type_name: "ECT60x2" },
    BuiltinDriver { vendor_id: 0x00000a88, product_id: 0x0a880004, type_name: "ECT86" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07432852, type_name: "EJ1859" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bbc2852, type_name: "EJ3004" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c822852, type_name: "EJ3202" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c8e2852, type_name: "EJ3214" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fa22852, type_name: "EJ4002" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fa42852, type_name: "EJ4004" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fa82852, type_name: "EJ4008" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fb22852, type_name: "EJ4018" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fb82852, type_name: "EJ4024" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x10242852, type_name: "EJ4132" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x10262852, type_name: "EJ4134" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x138a2852, type_name: "EJ5002" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x044c2c52, type_name: "EK1100" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x044d2c52, type_name: "EK1101" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x04562c52, type_name: "EK1110" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x04622c52, type_name: "EK1122" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07162c52, type_name: "EK1814" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x071a2c52, type_name: "EK1818" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07242c52, type_name: "EK1828-0010" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07242c52, type_name: "EK1828" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x03ea3052, type_name: "EL1002" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x03ec3052, type_name: "EL1004" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x03f03052, type_name: "EL1008" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x03f43052, type_name: "EL1012" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x03f63052, type_name: "EL1014" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x03fa3052, type_name: "EL1018" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x04003052, type_name: "EL1024" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x040a3052, type_name: "EL1034" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x043c3052, type_name: "EL1084" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x04403052, type_name: "EL1088" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x04463052, type_name: "EL1094" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x044a3052, type_name: "EL1098" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x04503052, type_name: "EL1104" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x045a3052, type_name: "EL1114" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x04643052, type_name: "EL1124" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x046e3052, type_name: "EL1134" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x04783052, type_name: "EL1144" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x04e43052, type_name: "EL1252" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x070c3052, type_name: "EL1804" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07103052, type_name: "EL1808" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07113052, type_name: "EL1809" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x071b3052, type_name: "EL1819" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x073c3052, type_name: "EL1852" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07433052, type_name: "EL1859" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07703052, type_name: "EL1904" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x077e3052, type_name: "EL1918_LOGIC" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07d23052, type_name: "EL2002" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07d43052, type_name: "EL2004" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07d83052, type_name: "EL2008" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07e63052, type_name: "EL2022" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07e83052, type_name: "EL2024" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07f03052, type_name: "EL2032" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07f23052, type_name: "EL2034" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07fa3052, type_name: "EL2042" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x08243052, type_name: "EL2084" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x08283052, type_name: "EL2088" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x084c3052, type_name: "EL2124" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x089a3052, type_name: "EL2202" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x09d93052, type_name: "EL2521" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0a343052, type_name: "EL2612" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0a3e3052, type_name: "EL2622" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0a4a3052, type_name: "EL2634" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0a5c3052, type_name: "EL2652" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0aee3052, type_name: "EL2798" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0af83052, type_name: "EL2808" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0af93052, type_name: "EL2809" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0b583052, type_name: "EL2904" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bb93052, type_name: "EL3001" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bba3052, type_name: "EL3002" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bbc3052, type_name: "EL3004" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bc03052, type_name: "EL3008" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bc33052, type_name: "EL3011" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bc43052, type_name: "EL3012" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bc63052, type_name: "EL3014" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bcd3052, type_name: "EL3021" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bce3052, type_name: "EL3022" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bd03052, type_name: "EL3024" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0be13052, type_name: "EL3041" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0be23052, type_name: "EL3042" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0be43052, type_name: "EL3044" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0be83052, type_name: "EL3048" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0beb3052, type_name: "EL3051" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bec3052, type_name: "EL3052" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bee3052, type_name: "EL3054" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bf23052, type_name: "EL3058" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bf53052, type_name: "EL3061" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bf63052, type_name: "EL3062" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bf83052, type_name: "EL3064" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0bfc3052, type_name: "EL3068" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c1d3052, type_name: "EL3101" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c1e3052, type_name: "EL3102" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c203052, type_name: "EL3104" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c273052, type_name: "EL3111" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c283052, type_name: "EL3112" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c2a3052, type_name: "EL3114" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c313052, type_name: "EL3121" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c323052, type_name: "EL3122" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c343052, type_name: "EL3124" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c453052, type_name: "EL3141" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c463052, type_name: "EL3142" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c483052, type_name: "EL3144" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c4f3052, type_name: "EL3151" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c503052, type_name: "EL3152" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c523052, type_name: "EL3154" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c593052, type_name: "EL3161" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c5a3052, type_name: "EL3162" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c5c3052, type_name: "EL3164" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c6e3052, type_name: "EL3182" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c813052, type_name: "EL3201" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c823052, type_name: "EL3202" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c843052, type_name: "EL3204" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c883052, type_name: "EL3208" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c8e3052, type_name: "EL3214" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c923052, type_name: "EL3218" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0cb73052, type_name: "EL3255" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0d4b3052, type_name: "EL3403" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fa13052, type_name: "EL4001" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fa23052, type_name: "EL4002" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fa43052, type_name: "EL4004" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fa83052, type_name: "EL4008" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fab3052, type_name: "EL4011" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fac3052, type_name: "EL4012" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fae3052, type_name: "EL4014" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fb23052, type_name: "EL4018" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fb53052, type_name: "EL4021" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fb63052, type_name: "EL4022" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fb83052, type_name: "EL4024" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fbc3052, type_name: "EL4028" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fbf3052, type_name: "EL4031" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fc03052, type_name: "EL4032" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fc23052, type_name: "EL4034" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0fc63052, type_name: "EL4038" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x10063052, type_name: "EL4102" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x10083052, type_name: "EL4104" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x10103052, type_name: "EL4112" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x10123052, type_name: "EL4114" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x101a3052, type_name: "EL4122" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x101c3052, type_name: "EL4124" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x10243052, type_name: "EL4132" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x10263052, type_name: "EL4134" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x138a3052, type_name: "EL5002" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x13a83052, type_name: "EL5032" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x13ed3052, type_name: "EL5101" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x13ee3052, type_name: "EL5102" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x141f3052, type_name: "EL5151" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x14203052, type_name: "EL5152" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x17ca3052, type_name: "EL6090" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1af43052, type_name: "EL6900" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1b773052, type_name: "EL7031" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1b813052, type_name: "EL7041-0052" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1b813052, type_name: "EL7041-1000" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1b813052, type_name: "EL7041" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1c213052, type_name: "EL7201_9014" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1c2b3052, type_name: "EL7211" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1c353052, type_name: "EL7221" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1cae3052, type_name: "EL7342" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1cf33052, type_name: "EL7411" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x25213052, type_name: "EL9505" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x25243052, type_name: "EL9508" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x25263052, type_name: "EL9510" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x25283052, type_name: "EL9512" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x252b3052, type_name: "EL9515" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x25683052, type_name: "EL9576" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0e753452, type_name: "EM3701" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0e763452, type_name: "EM3702" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0e803452, type_name: "EM3712" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1b5c3452, type_name: "EM7004" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x03f04052, type_name: "EP1008" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x03fa4052, type_name: "EP1018" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x04624052, type_name: "EP1122" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x071b4052, type_name: "EP1819" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07d84052, type_name: "EP2008" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x07ec4052, type_name: "EP2028" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x09044052, type_name: "EP2308" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x090c4052, type_name: "EP2316" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x090e4052, type_name: "EP2318" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x09184052, type_name: "EP2328" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x09224052, type_name: "EP2338" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x09234052, type_name: "EP2339" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x092d4052, type_name: "EP2349" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0af94052, type_name: "EP2809" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c664052, type_name: "EP3174" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c704052, type_name: "EP3184" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x0c844052, type_name: "EP3204" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x104e4052, type_name: "EP4174" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x1b813052, type_name: "EP7041" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x64765649, type_name: "EPP2308" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x090c4052, type_name: "EPP2316" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x647656e9, type_name: "EPP2318" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x64765789, type_name: "EPP2328" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x647657e9, type_name: "EPP2334" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x64765829, type_name: "EPP2338" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x64765839, type_name: "EPP2339" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x647658d9, type_name: "EPP2349" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x9809ab69, type_name: "EPX3158" },
    BuiltinDriver { vendor_id: 0x00000002, product_id: 0x092d4052, type_name: "EQ2339" },
    BuiltinDriver { vendor_id: 0x00000114, product_id: 0x01000001, type_name: "EX260-SEC1" },
    BuiltinDriver { vendor_id: 0x00000114, product_id: 0x01000002, type_name: "EX260-SEC2" },
    BuiltinDriver { vendor_id: 0x00000114, product_id: 0x01000003, type_name: "EX260-SEC3" },
    BuiltinDriver { vendor_id: 0x00000114, product_id: 0x01000004, type_name: "EX260-SEC4" },
    BuiltinDriver { vendor_id: 0x0000079a, product_id: 0x0debacca, type_name: "EasyIO" },
    BuiltinDriver { vendor_id: 0x0000079a, product_id: 0x00decade, type_name: "EPOCAT" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000005, type_name: "OmrG5_KN01H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000002, type_name: "OmrG5_KN01L" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000006, type_name: "OmrG5_KN02H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000003, type_name: "OmrG5_KN02L" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000007, type_name: "OmrG5_KN04H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000004, type_name: "OmrG5_KN04L" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x0000000b, type_name: "OmrG5_KN06F" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000008, type_name: "OmrG5_KN08H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x0000000c, type_name: "OmrG5_KN10F" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000009, type_name: "OmrG5_KN10H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x0000005f, type_name: "OmrG5_KN150F" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x0000005a, type_name: "OmrG5_KN150H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x0000000d, type_name: "OmrG5_KN15F" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x0000000a, type_name: "OmrG5_KN15H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x0000005b, type_name: "OmrG5_KN20F" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000056, type_name: "OmrG5_KN20H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x0000005c, type_name: "OmrG5_KN30F" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000057, type_name: "OmrG5_KN30H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x0000005d, type_name: "OmrG5_KN50F" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000058, type_name: "OmrG5_KN50H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x0000005e, type_name: "OmrG5_KN75F" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000059, type_name: "OmrG5_KN75H" },
    BuiltinDriver { vendor_id: 0x00000083, product_id: 0x00000001, type_name: "OmrG5_KNA5L" },
    BuiltinDriver { vendor_id: 0x000000b9, product_id: 0x00001388, type_name: "STMDS5K" },
    BuiltinDriver { vendor_id: 0xffffffff, product_id: 0xffffffff, type_name: "basic_cia402" },
];
